//! The pull-up/down latch sequence, as a type state.
//!
//! The pull resistors are not set through a per-pin field. Instead the
//! desired code is loaded into GPPUD, then clocked into a pin by
//! strobing its bit in GPPUDCLK, with a settling time after each step.
//! Both registers must be returned to zero afterwards, or the next
//! strobe on any pin in the same clock word latches a stale code.

use embedded_hal_1::delay::DelayNs;

use crate::pac::{map, Group, Location, Pull};
use crate::regs::Registers;

/// Nothing loaded. (type state)
#[derive(Debug)]
pub(crate) struct Idle;

/// A code is loaded into GPPUD. (type state)
#[derive(Debug)]
pub(crate) struct Loaded;

/// A pin's clock bit is asserted. (type state)
#[derive(Debug)]
pub(crate) struct Clocked {
    clock: Location,
}

/// One run of the pull sequence.
///
/// The caller must make sure no other sequence runs at the same time.
pub(crate) struct Sequence<'a, R, D, State> {
    regs: &'a R,
    delay: &'a mut D,
    settle_ns: u32,
    state: State,
}

impl<'a, R, D> Sequence<'a, R, D, Idle>
where
    R: Registers,
    D: DelayNs,
{
    #[inline(always)]
    pub(crate) fn new(regs: &'a R, delay: &'a mut D, settle_ns: u32) -> Self {
        Self {
            regs,
            delay,
            settle_ns,
            state: Idle,
        }
    }

    /// Load the control code, then wait for it to settle.
    #[inline(always)]
    pub(crate) fn load(self, pull: Pull) -> Sequence<'a, R, D, Loaded> {
        self.regs.write(map::GPPUD, pull.bits() & map::GPPUD_MASK);
        self.settle(Loaded)
    }
}

impl<'a, R, D> Sequence<'a, R, D, Loaded>
where
    R: Registers,
    D: DelayNs,
{
    /// Strobe the clock for `pin`, then wait for it to latch.
    #[inline(always)]
    pub(crate) fn clock(self, pin: u8) -> Sequence<'a, R, D, Clocked> {
        let clock = Group::PullClock.locate(pin);
        self.regs.write(clock.offset(), clock.bit());
        self.settle(Clocked { clock })
    }
}

impl<'a, R, D> Sequence<'a, R, D, Clocked>
where
    R: Registers,
    D: DelayNs,
{
    /// Return both registers to zero.
    #[inline(always)]
    pub(crate) fn release(self) -> Sequence<'a, R, D, Idle> {
        self.regs.write(map::GPPUD, 0);
        self.regs.write(self.state.clock.offset(), 0);
        Sequence {
            regs: self.regs,
            delay: self.delay,
            settle_ns: self.settle_ns,
            state: Idle,
        }
    }
}

impl<'a, R, D, State> Sequence<'a, R, D, State>
where
    D: DelayNs,
{
    // wait, then move on to the next state
    #[inline(always)]
    fn settle<Next>(self, next: Next) -> Sequence<'a, R, D, Next> {
        self.delay.delay_ns(self.settle_ns);
        Sequence {
            regs: self.regs,
            delay: self.delay,
            settle_ns: self.settle_ns,
            state: next,
        }
    }
}
