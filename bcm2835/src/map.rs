//! Byte offsets of the GPIO registers, relative to the start of the
//! GPIO block.

/// Physical base address of the peripherals on BCM2835.
pub const PERIPHERAL_BASE: usize = 0x2000_0000;

/// Physical base address of the peripherals on BCM2836 and BCM2837.
///
/// The GPIO block layout is identical, only the base moves.
pub const PERIPHERAL_BASE_2836: usize = 0x3f00_0000;

/// Offset of the GPIO block within the peripherals.
pub const GPIO_OFFSET: usize = 0x0020_0000;

/// Physical address of the GPIO block on BCM2835.
pub const GPIO_BASE: usize = PERIPHERAL_BASE + GPIO_OFFSET;

/// Size of the region mapped to reach the GPIO registers.
pub const BLOCK_SIZE: usize = 4 * 1024;

/// Highest GPIO line number on the chip.
pub const MAX_PIN: u8 = 53;

/// Number of GPIO lines on the chip.
pub const PIN_COUNT: usize = MAX_PIN as usize + 1;

/// Size in bytes of a single register word.
pub const WORD: usize = 4;

// function select, 10 pins per word
pub const GPFSEL0: usize = 0x00;
pub const GPFSEL1: usize = 0x04;
pub const GPFSEL2: usize = 0x08;
pub const GPFSEL3: usize = 0x0c;
pub const GPFSEL4: usize = 0x10;
pub const GPFSEL5: usize = 0x14;

// output set, write 1 to set
pub const GPSET0: usize = 0x1c;
pub const GPSET1: usize = 0x20;

// output clear, write 1 to clear
pub const GPCLR0: usize = 0x28;
pub const GPCLR1: usize = 0x2c;

// pin level, read only
pub const GPLEV0: usize = 0x34;
pub const GPLEV1: usize = 0x38;

/// Pull-up/down control. Only the low two bits are used.
pub const GPPUD: usize = 0x94;

// pull-up/down clock, one bit per pin
pub const GPPUDCLK0: usize = 0x98;
pub const GPPUDCLK1: usize = 0x9c;

/// Mask of the control bits in [GPPUD].
pub const GPPUD_MASK: u32 = 0b11;

/// Mask of a single function select field, before shifting.
pub const FSEL_MASK: u32 = 0b111;

/// Function select banks, in order.
pub const FSEL_BANKS: [usize; 6] = [GPFSEL0, GPFSEL1, GPFSEL2, GPFSEL3, GPFSEL4, GPFSEL5];

/// Output set banks, in order.
pub const SET_BANKS: [usize; 2] = [GPSET0, GPSET1];

/// Output clear banks, in order.
pub const CLR_BANKS: [usize; 2] = [GPCLR0, GPCLR1];

/// Level banks, in order.
pub const LEV_BANKS: [usize; 2] = [GPLEV0, GPLEV1];

/// Pull clock banks, in order.
pub const PUDCLK_BANKS: [usize; 2] = [GPPUDCLK0, GPPUDCLK1];

#[cfg(test)]
mod test {
    use super::*;

    fn contiguous(banks: &[usize]) -> bool {
        banks.windows(2).all(|w| w[1] == w[0] + WORD)
    }

    #[test]
    fn banks_are_contiguous_words() {
        assert!(contiguous(&FSEL_BANKS));
        assert!(contiguous(&SET_BANKS));
        assert!(contiguous(&CLR_BANKS));
        assert!(contiguous(&LEV_BANKS));
        assert!(contiguous(&PUDCLK_BANKS));
    }

    #[test]
    fn banks_cover_every_pin() {
        assert_eq!(FSEL_BANKS.len(), PIN_COUNT.div_ceil(10));
        assert_eq!(SET_BANKS.len(), PIN_COUNT.div_ceil(32));
        assert_eq!(CLR_BANKS.len(), PIN_COUNT.div_ceil(32));
        assert_eq!(LEV_BANKS.len(), PIN_COUNT.div_ceil(32));
        assert_eq!(PUDCLK_BANKS.len(), PIN_COUNT.div_ceil(32));
    }

    #[test]
    fn registers_fit_in_block() {
        assert!(GPPUDCLK1 + WORD <= BLOCK_SIZE);
        assert_eq!(GPIO_BASE, 0x2020_0000);
        assert_eq!(GPIO_BASE % BLOCK_SIZE, 0);
    }
}
