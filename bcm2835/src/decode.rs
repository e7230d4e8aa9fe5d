use crate::map;

/// A group of registers that share a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Group {
    /// Function select, three bits per pin.
    FunctionSelect,
    /// Output set, write-one-to-set.
    Set,
    /// Output clear, write-one-to-clear.
    Clear,
    /// Pin level, read only.
    Level,
    /// Pull-up/down clock, one bit per pin.
    PullClock,
}

impl Group {
    /// Every register group.
    pub const ALL: [Group; 5] = [
        Group::FunctionSelect,
        Group::Set,
        Group::Clear,
        Group::Level,
        Group::PullClock,
    ];

    /// Width in bits of the field for one pin.
    #[inline(always)]
    pub const fn field_width(self) -> u32 {
        match self {
            Self::FunctionSelect => 3,
            _ => 1,
        }
    }

    /// Number of pins packed into one register word.
    #[inline(always)]
    pub const fn pins_per_bank(self) -> u8 {
        match self {
            Self::FunctionSelect => 10,
            _ => 32,
        }
    }

    /// Byte offsets of the register words for this group, in bank order.
    #[inline(always)]
    pub const fn banks(self) -> &'static [usize] {
        match self {
            Self::FunctionSelect => &map::FSEL_BANKS,
            Self::Set => &map::SET_BANKS,
            Self::Clear => &map::CLR_BANKS,
            Self::Level => &map::LEV_BANKS,
            Self::PullClock => &map::PUDCLK_BANKS,
        }
    }

    /// Find the register word and field holding `pin`.
    ///
    /// `pin` must be at most [map::MAX_PIN]. Larger values are a caller
    /// bug; they are caught here in debug builds and otherwise produce a
    /// location past the end of the group.
    #[inline(always)]
    pub const fn locate(self, pin: u8) -> Location {
        debug_assert!(pin <= map::MAX_PIN);
        let per = self.pins_per_bank();
        Location {
            group: self,
            bank: (pin / per) as usize,
            shift: (pin % per) as u32 * self.field_width(),
        }
    }
}

/// Where a pin lives inside a register group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Location {
    /// The register group.
    pub group: Group,
    /// Index of the register word within the group.
    pub bank: usize,
    /// Bit position of the least significant bit of the field.
    pub shift: u32,
}

impl Location {
    /// Byte offset of the register word, from the start of the GPIO block.
    #[inline(always)]
    pub const fn offset(&self) -> usize {
        self.group.banks()[0] + self.bank * map::WORD
    }

    /// Mask covering this pin's field within the word.
    #[inline(always)]
    pub const fn mask(&self) -> u32 {
        ((1 << self.group.field_width()) - 1) << self.shift
    }

    /// The word with a single set bit for this pin, as written to the
    /// set, clear, and pull clock registers.
    #[inline(always)]
    pub const fn bit(&self) -> u32 {
        1 << self.shift
    }

    /// Place `value` into this field, leaving the rest of the word zero.
    #[inline(always)]
    pub const fn place(&self, value: u32) -> u32 {
        (value << self.shift) & self.mask()
    }

    /// Extract this field from a register word.
    #[inline(always)]
    pub const fn extract(&self, word: u32) -> u32 {
        (word & self.mask()) >> self.shift
    }
}

/// Shorthand for [Group::locate].
#[inline(always)]
pub const fn locate(pin: u8, group: Group) -> Location {
    group.locate(pin)
}

#[cfg(test)]
mod test {
    use super::*;

    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    #[derive(Debug, Clone, Copy)]
    struct ValidPin(u8);

    impl Arbitrary for ValidPin {
        fn arbitrary(g: &mut Gen) -> Self {
            ValidPin(u8::arbitrary(g) % (map::MAX_PIN + 1))
        }
    }

    #[quickcheck]
    fn one_bit_groups(pin: ValidPin) -> bool {
        let p = pin.0;
        [Group::Set, Group::Clear, Group::Level, Group::PullClock]
            .iter()
            .all(|g| {
                let loc = g.locate(p);
                loc.bank == (p / 32) as usize && loc.shift == (p % 32) as u32
            })
    }

    #[quickcheck]
    fn function_select(pin: ValidPin) -> bool {
        let loc = Group::FunctionSelect.locate(pin.0);
        loc.bank == (pin.0 / 10) as usize && loc.shift == (pin.0 % 10) as u32 * 3
    }

    #[quickcheck]
    fn locations_stay_in_their_group(pin: ValidPin) -> bool {
        Group::ALL.iter().all(|g| {
            let loc = g.locate(pin.0);
            loc.bank < g.banks().len() && loc.offset() == g.banks()[loc.bank]
        })
    }

    #[quickcheck]
    fn field_roundtrip(pin: ValidPin, value: u32, background: u32) -> bool {
        let loc = Group::FunctionSelect.locate(pin.0);
        let value = value & map::FSEL_MASK;
        let word = (background & !loc.mask()) | loc.place(value);
        loc.extract(word) == value && (word & !loc.mask()) == (background & !loc.mask())
    }

    #[test]
    fn known_offsets() {
        assert_eq!(locate(22, Group::Set).offset(), map::GPSET0);
        assert_eq!(locate(22, Group::Set).bit(), 1 << 22);
        assert_eq!(locate(40, Group::Clear).offset(), map::GPCLR1);
        assert_eq!(locate(40, Group::Clear).bit(), 1 << 8);
        assert_eq!(locate(53, Group::Level).offset(), map::GPLEV1);

        let fsel = locate(22, Group::FunctionSelect);
        assert_eq!(fsel.offset(), map::GPFSEL2);
        assert_eq!(fsel.shift, 6);
        assert_eq!(fsel.mask(), 0b111 << 6);
        assert_eq!(locate(53, Group::FunctionSelect).offset(), map::GPFSEL5);
    }

    #[test]
    fn pull_clock_uses_whole_words() {
        // pins 0..=31 share the first word, the rest the second
        for pin in 0..=31 {
            let loc = locate(pin, Group::PullClock);
            assert_eq!(loc.offset(), map::GPPUDCLK0);
            assert_eq!(loc.bit(), 1 << pin);
        }
        for pin in 32..=map::MAX_PIN {
            let loc = locate(pin, Group::PullClock);
            assert_eq!(loc.offset(), map::GPPUDCLK1);
            assert_eq!(loc.bit(), 1 << (pin - 32));
        }
    }
}
