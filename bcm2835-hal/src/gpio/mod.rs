//! Pins with fast paths through the register controller.
//!
//! The portable pin layer (opening, closing, direction bookkeeping,
//! error reporting) lives outside this crate, and is described here by
//! [GenericPin] and [OpenPin]. A [Pin] wraps one of those and sends
//! level reads and writes, and pull configuration, straight to the
//! registers.

mod hal02;
mod hal1;

mod pin;
pub use pin::*;

/// Digital pin state.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    Low = 0,
    High = 1,
}

impl From<bool> for PinState {
    #[inline(always)]
    fn from(value: bool) -> Self {
        if value {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl core::ops::Not for PinState {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }
}

impl PinState {
    /// Is the pin high?
    #[inline(always)]
    pub fn is_high(&self) -> bool {
        *self == Self::High
    }

    /// Is the pin low?
    #[inline(always)]
    pub fn is_low(&self) -> bool {
        *self == Self::Low
    }
}

/// Direction of a pin, as tracked by the portable pin layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Input,
    Output,
}

/// The operations of a portable pin handle.
///
/// Errors are sticky: once an operation fails, [GenericPin::err]
/// returns that failure until the handle is closed. Operations that
/// cannot return an error record it there instead.
pub trait GenericPin {
    type Error;

    /// The current direction of the pin.
    fn mode(&mut self) -> Mode;

    /// Change the direction of the pin.
    fn set_mode(&mut self, mode: Mode);

    /// Drive the pin high.
    fn set(&mut self);

    /// Drive the pin low.
    fn clear(&mut self);

    /// Is the pin high?
    fn get(&mut self) -> bool;

    /// The first error encountered on this pin, if any.
    fn err(&self) -> Option<&Self::Error>;

    /// Release the pin.
    fn close(self) -> Result<(), Self::Error>
    where
        Self: Sized;
}

/// A portable pin handle that can be opened by number.
pub trait OpenPin: GenericPin + Sized {
    /// Open pin `number` in the given direction.
    fn open(number: u8, mode: Mode) -> Result<Self, Self::Error>;
}
