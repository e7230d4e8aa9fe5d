//! The register controller: every pin operation, in one place.

use std::os::fd::BorrowedFd;

use embedded_hal_1::delay::DelayNs;

use crate::config::Config;
use crate::delay::SpinDelay;
use crate::error::MapError;
use crate::pac::{Function, Group, Pull};
use crate::regs::{Registers, Window};

mod pull;

/// Owns the GPIO registers and performs the per-pin operations on them.
///
/// Pin numbers passed in must be at most
/// [MAX_PIN][crate::pac::map::MAX_PIN]; checking that is the caller's
/// job.
///
/// Set, clear, and level operations are single register accesses, and
/// are safe to use from many threads at once. Function selection is a
/// read-modify-write of a word shared by ten pins, and is *not*
/// synchronized. Callers touching pins in the same function select word
/// from several threads must serialize those calls themselves. The
/// pull-up/down sequence holds an internal lock for its duration, so
/// two sequences never interleave.
#[derive(Debug)]
pub struct Controller<R = Window, D = SpinDelay> {
    regs: R,
    settle_ns: u32,
    // held for the whole pull sequence
    pull: spin::Mutex<D>,
}

impl Controller {
    /// Map the GPIO block and wrap it in a controller.
    pub fn map(fd: BorrowedFd<'_>, config: &Config) -> Result<Self, MapError> {
        Ok(Self::new(Window::map(fd, config)?, config))
    }
}

impl<R> Controller<R, SpinDelay>
where
    R: Registers,
{
    /// Wrap a register block, using a busy-wait for pull settling.
    #[inline(always)]
    pub fn new(regs: R, config: &Config) -> Self {
        Self::with_delay(regs, SpinDelay, config)
    }
}

impl<R, D> Controller<R, D>
where
    R: Registers,
{
    /// Wrap a register block, with a custom delay for pull settling.
    #[inline(always)]
    pub fn with_delay(regs: R, delay: D, config: &Config) -> Self {
        Self {
            regs,
            settle_ns: config.get_settle_ns(),
            pull: spin::Mutex::new(delay),
        }
    }

    /// Recover the register block and delay.
    #[inline(always)]
    pub fn free(self) -> (R, D) {
        (self.regs, self.pull.into_inner())
    }

    /// The underlying register block.
    #[inline(always)]
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Drive `pin` high.
    #[inline(always)]
    pub fn set_level(&self, pin: u8) {
        let loc = Group::Set.locate(pin);
        // write-one-to-set, the other bits are ignored
        self.regs.write(loc.offset(), loc.bit());
    }

    /// Drive `pin` low.
    #[inline(always)]
    pub fn clear_level(&self, pin: u8) {
        let loc = Group::Clear.locate(pin);
        // write-one-to-clear, the other bits are ignored
        self.regs.write(loc.offset(), loc.bit());
    }

    /// Is `pin` high?
    #[inline(always)]
    pub fn read_level(&self, pin: u8) -> bool {
        let loc = Group::Level.locate(pin);
        self.regs.read(loc.offset()) & loc.bit() != 0
    }

    /// Select the function of `pin`, leaving the other pins that share
    /// its register word alone.
    #[inline(always)]
    pub fn select_function(&self, pin: u8, function: Function) {
        let loc = Group::FunctionSelect.locate(pin);
        self.regs
            .modify(loc.offset(), |w| (w & !loc.mask()) | loc.place(function.bits()));
    }

    /// The currently selected function of `pin`.
    #[inline(always)]
    pub fn function(&self, pin: u8) -> Function {
        let loc = Group::FunctionSelect.locate(pin);
        let bits = loc.extract(self.regs.read(loc.offset()));
        // extract() yields exactly three bits, and all eight are valid
        Function::from_bits(bits).unwrap_or(Function::Input)
    }
}

impl<R, D> Controller<R, D>
where
    R: Registers,
    D: DelayNs,
{
    /// Enable or disable the pull resistor on `pin`.
    ///
    /// Runs the full load, clock, release sequence before returning,
    /// blocking any other pull sequence for its duration.
    pub fn configure_pull(&self, pin: u8, pull: Pull) {
        let mut delay = self.pull.lock();

        #[cfg(feature = "defmt")]
        defmt::trace!("pull {} on pin {}", pull, pin);

        pull::Sequence::new(&self.regs, &mut *delay, self.settle_ns)
            .load(pull)
            .clock(pin)
            .release();
    }
}
