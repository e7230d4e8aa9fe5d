use crate::controller::Controller;
use crate::delay::SpinDelay;
use crate::pac::{map, Function, Pull};
use crate::regs::{Registers, Window};

use embedded_hal_1::delay::DelayNs;

use super::{GenericPin, Mode, OpenPin, PinState};

/// A portable pin, with fast paths for level and pull access.
///
/// Everything not listed here (direction, errors, closing) goes to the
/// wrapped pin unchanged.
pub struct Pin<'c, P, R = Window, D = SpinDelay> {
    inner: P,
    pin: u8,
    controller: &'c Controller<R, D>,
}

impl<P, R, D> core::fmt::Debug for Pin<'_, P, R, D>
where
    P: core::fmt::Debug,
{
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("Pin").field(&self.pin).field(&self.inner).finish()
    }
}

#[cfg(feature = "defmt")]
impl<P, R, D> defmt::Format for Pin<'_, P, R, D> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Pin({})", self.pin)
    }
}

impl<'c, P, R, D> Pin<'c, P, R, D>
where
    P: GenericPin,
    R: Registers,
    D: DelayNs,
{
    /// Open pin `number` through the portable layer, then apply `pull`
    /// if given.
    ///
    /// # Panics
    /// If `number` is not a GPIO line on this chip. This is checked
    /// before the portable layer is asked to open anything.
    pub fn open(
        controller: &'c Controller<R, D>,
        number: u8,
        mode: Mode,
        pull: Option<Pull>,
    ) -> Result<Self, P::Error>
    where
        P: OpenPin,
    {
        assert!(number <= map::MAX_PIN, "no GPIO line {}", number);
        let inner = P::open(number, mode)?;
        Ok(Self::wrap(controller, inner, number, pull))
    }

    /// Wrap an already open portable pin numbered `number`, then apply
    /// `pull` if given.
    ///
    /// # Panics
    /// If `number` is not a GPIO line on this chip.
    pub fn wrap(
        controller: &'c Controller<R, D>,
        inner: P,
        number: u8,
        pull: Option<Pull>,
    ) -> Self {
        assert!(number <= map::MAX_PIN, "no GPIO line {}", number);
        let mut pin = Self {
            inner,
            pin: number,
            controller,
        };
        if let Some(pull) = pull {
            pin.pull(pull);
        }
        pin
    }

    /// Enable or disable the pull resistor.
    #[inline]
    pub fn pull(&mut self, pull: Pull) {
        self.controller.configure_pull(self.pin, pull);
    }
}

impl<'c, P, R, D> Pin<'c, P, R, D>
where
    R: Registers,
{
    /// Get the pin number of this pin.
    #[inline(always)]
    pub fn number(&self) -> u8 {
        self.pin
    }

    /// The controller this pin goes through.
    #[inline(always)]
    pub fn controller(&self) -> &'c Controller<R, D> {
        self.controller
    }

    /// The wrapped portable pin.
    #[inline(always)]
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwrap the portable pin.
    #[inline(always)]
    pub fn into_inner(self) -> P {
        self.inner
    }

    /// Drive the pin high.
    #[inline(always)]
    pub fn set(&mut self) {
        self.controller.set_level(self.pin);
    }

    /// Drive the pin low.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.controller.clear_level(self.pin);
    }

    /// Is the pin high?
    #[inline(always)]
    pub fn get(&self) -> bool {
        self.controller.read_level(self.pin)
    }

    /// Read the pin.
    #[inline(always)]
    pub fn read(&self) -> PinState {
        self.get().into()
    }

    /// Drive the pin to `state`.
    #[inline(always)]
    pub fn set_state(&mut self, state: PinState) {
        match state {
            PinState::High => self.set(),
            PinState::Low => self.clear(),
        }
    }

    /// Toggle the output.
    #[inline(always)]
    pub fn toggle(&mut self) {
        self.set_state(!self.read());
    }

    /// Select an alternate function for this pin.
    ///
    /// This bypasses the portable layer, so its idea of the pin's mode
    /// will be out of date until the function is set back to
    /// [Function::Input] or [Function::Output].
    #[inline(always)]
    pub fn select_function(&mut self, function: Function) {
        self.controller.select_function(self.pin, function);
    }

    /// The currently selected function of this pin.
    #[inline(always)]
    pub fn function(&self) -> Function {
        self.controller.function(self.pin)
    }
}

impl<'c, P, R, D> Pin<'c, P, R, D>
where
    P: GenericPin,
{
    /// The current direction, as tracked by the portable layer.
    #[inline(always)]
    pub fn mode(&mut self) -> Mode {
        self.inner.mode()
    }

    /// Change direction through the portable layer.
    #[inline(always)]
    pub fn set_mode(&mut self, mode: Mode) {
        self.inner.set_mode(mode)
    }

    /// The first error recorded by the portable layer, if any.
    #[inline(always)]
    pub fn err(&self) -> Option<&P::Error> {
        self.inner.err()
    }

    /// Close the pin through the portable layer.
    #[inline(always)]
    pub fn close(self) -> Result<(), P::Error> {
        self.inner.close()
    }
}

impl<P, R, D> GenericPin for Pin<'_, P, R, D>
where
    P: GenericPin,
    R: Registers,
{
    type Error = P::Error;

    #[inline(always)]
    fn mode(&mut self) -> Mode {
        Pin::mode(self)
    }

    #[inline(always)]
    fn set_mode(&mut self, mode: Mode) {
        Pin::set_mode(self, mode)
    }

    #[inline(always)]
    fn set(&mut self) {
        Pin::set(self)
    }

    #[inline(always)]
    fn clear(&mut self) {
        Pin::clear(self)
    }

    #[inline(always)]
    fn get(&mut self) -> bool {
        Pin::get(self)
    }

    #[inline(always)]
    fn err(&self) -> Option<&P::Error> {
        Pin::err(self)
    }

    #[inline(always)]
    fn close(self) -> Result<(), P::Error> {
        Pin::close(self)
    }
}
