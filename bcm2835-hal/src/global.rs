//! The process-wide register controller.
//!
//! Mapping the GPIO block is done once per process. The first call to
//! [initialize()] maps it; every later call, including ones racing the
//! first, waits for that to finish and gets the same controller back.

use std::os::fd::BorrowedFd;

use crate::config::Config;
use crate::controller::Controller;
use crate::error::{MapError, OpenError};
use crate::gpio::{Mode, OpenPin, Pin};
use crate::pac::Pull;

static CONTROLLER: spin::Once<Controller> = spin::Once::new();

/// Map the GPIO block through `/dev/mem` on a BCM2835, if not already
/// done.
///
/// `fd` must refer to the memory device. It is only used by the first
/// successful call.
#[inline]
pub fn initialize(fd: BorrowedFd<'_>) -> Result<&'static Controller, MapError> {
    initialize_with(fd, &Config::new())
}

/// Map the GPIO block with the given configuration, if not already
/// done.
///
/// Once mapped, `fd` and `config` are ignored by later calls. If the
/// mapping fails nothing is stored, and the next call tries again.
pub fn initialize_with(
    fd: BorrowedFd<'_>,
    config: &Config,
) -> Result<&'static Controller, MapError> {
    CONTROLLER.try_call_once(|| Controller::map(fd, config))
}

/// The global controller, if [initialize()] has succeeded.
#[inline(always)]
pub fn controller() -> Option<&'static Controller> {
    CONTROLLER.get()
}

/// Open pin `number` through the portable layer, with direct register
/// access through the global controller.
///
/// Maps the GPIO block on first use. `pull`, if given, is applied
/// before returning.
pub fn open_pin<P>(
    fd: BorrowedFd<'_>,
    number: u8,
    mode: Mode,
    pull: Option<Pull>,
) -> Result<Pin<'static, P>, OpenError<P::Error>>
where
    P: OpenPin,
{
    let controller = initialize(fd)?;
    Pin::open(controller, number, mode, pull).map_err(OpenError::Pin)
}
