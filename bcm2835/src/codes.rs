/// Function of a pin, as written into its function select field.
///
/// The alternate function codes are not in order, this matches the
/// datasheet.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Function {
    Input = 0b000,
    Output = 0b001,
    Alt0 = 0b100,
    Alt1 = 0b101,
    Alt2 = 0b110,
    Alt3 = 0b111,
    Alt4 = 0b011,
    Alt5 = 0b010,
}

impl Function {
    /// The 3-bit code for this function.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Decode a 3-bit function code. Returns [None] if any bit above
    /// the low three is set.
    #[inline(always)]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        Some(match bits {
            0b000 => Self::Input,
            0b001 => Self::Output,
            0b100 => Self::Alt0,
            0b101 => Self::Alt1,
            0b110 => Self::Alt2,
            0b111 => Self::Alt3,
            0b011 => Self::Alt4,
            0b010 => Self::Alt5,
            _ => return None,
        })
    }
}

/// Pull resistor direction.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// No pull resistor.
    #[default]
    Off = 0b00,
    /// Pull down to ground.
    Down = 0b01,
    /// Pull up to 3.3V.
    Up = 0b10,
}

impl Pull {
    /// The 2-bit control code written to GPPUD.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Decode a GPPUD control code. The reserved code `0b11` and
    /// anything wider returns [None].
    #[inline(always)]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0b00 => Some(Self::Off),
            0b01 => Some(Self::Down),
            0b10 => Some(Self::Up),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn function_codes_are_a_bijection() {
        for bits in 0..8 {
            let f = Function::from_bits(bits).unwrap();
            assert_eq!(f.bits(), bits);
        }
        assert_eq!(Function::from_bits(8), None);
    }

    #[test]
    fn pull_codes() {
        assert_eq!(Pull::Off.bits(), 0);
        assert_eq!(Pull::Down.bits(), 1);
        assert_eq!(Pull::Up.bits(), 2);
        assert_eq!(Pull::from_bits(3), None);
        assert_eq!(Pull::default(), Pull::Off);
    }
}
