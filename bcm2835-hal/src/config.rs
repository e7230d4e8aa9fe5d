use crate::pac::map;

/// Default settling time for each step of the pull-up/down sequence.
///
/// The datasheet asks for 150 core clock cycles, which is 600ns at the
/// usual 250MHz core clock.
pub const PULL_SETTLE_NS: u32 = 1_000;

/// Where to find the GPIO block, and how to drive it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    offset: usize,
    settle_ns: u32,
}

impl Default for Config {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Configuration for `/dev/mem` on a BCM2835.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            offset: map::GPIO_BASE,
            settle_ns: PULL_SETTLE_NS,
        }
    }

    /// Configuration for `/dev/gpiomem`, which exposes only the GPIO
    /// block, starting at offset 0.
    #[inline(always)]
    pub const fn gpiomem() -> Self {
        Self::new().offset(0)
    }

    /// Configuration for `/dev/mem` on a BCM2836 or BCM2837.
    #[inline(always)]
    pub const fn bcm2836() -> Self {
        Self::new().offset(map::PERIPHERAL_BASE_2836 + map::GPIO_OFFSET)
    }

    /// Set the offset of the GPIO block in the memory device.
    #[inline(always)]
    pub const fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Get the offset of the GPIO block in the memory device.
    #[inline(always)]
    pub const fn get_offset(&self) -> usize {
        self.offset
    }

    /// Set the settling time used between pull-up/down steps.
    #[inline(always)]
    pub const fn settle_ns(mut self, ns: u32) -> Self {
        self.settle_ns = ns;
        self
    }

    /// Get the settling time used between pull-up/down steps.
    #[inline(always)]
    pub const fn get_settle_ns(&self) -> u32 {
        self.settle_ns
    }
}
