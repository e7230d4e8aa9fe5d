//! Short busy-wait delays.

use std::time::{Duration, Instant};

use embedded_hal_1::delay as hal1;

/// A delay that spins on the monotonic clock.
///
/// Meant for waits well under what [std::thread::sleep] can resolve,
/// like the pull-up/down settling time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpinDelay;

impl SpinDelay {
    /// Spin until at least `duration` has passed.
    #[inline]
    pub fn delay(&mut self, duration: Duration) {
        let start = Instant::now();
        while start.elapsed() < duration {
            core::hint::spin_loop();
        }
    }
}

impl hal1::DelayNs for SpinDelay {
    #[inline(always)]
    fn delay_ns(&mut self, ns: u32) {
        self.delay(Duration::from_nanos(ns.into()))
    }

    #[inline]
    fn delay_us(&mut self, us: u32) {
        self.delay(Duration::from_micros(us.into()))
    }

    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        self.delay(Duration::from_millis(ms.into()))
    }
}
