use core::convert::Infallible;
use embedded_hal_1::digital as hal1;

use crate::regs::Registers;

use super::{Pin, PinState};

impl From<hal1::PinState> for PinState {
    #[inline(always)]
    fn from(value: hal1::PinState) -> Self {
        (value == hal1::PinState::High).into()
    }
}

impl From<PinState> for hal1::PinState {
    #[inline(always)]
    fn from(value: PinState) -> Self {
        value.is_high().into()
    }
}

impl<P, R, D> hal1::ErrorType for Pin<'_, P, R, D> {
    type Error = Infallible;
}

impl<P, R, D> hal1::InputPin for Pin<'_, P, R, D>
where
    R: Registers,
{
    #[inline(always)]
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(Pin::get(self))
    }

    #[inline(always)]
    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!Pin::get(self))
    }
}

impl<P, R, D> hal1::OutputPin for Pin<'_, P, R, D>
where
    R: Registers,
{
    #[inline(always)]
    fn set_low(&mut self) -> Result<(), Infallible> {
        Pin::clear(self);
        Ok(())
    }

    #[inline(always)]
    fn set_high(&mut self) -> Result<(), Infallible> {
        Pin::set(self);
        Ok(())
    }

    #[inline(always)]
    fn set_state(&mut self, state: hal1::PinState) -> Result<(), Infallible> {
        Pin::set_state(self, state.into());
        Ok(())
    }
}

// the level register reflects the driven state of an output
impl<P, R, D> hal1::StatefulOutputPin for Pin<'_, P, R, D>
where
    R: Registers,
{
    #[inline(always)]
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(Pin::get(self))
    }

    #[inline(always)]
    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!Pin::get(self))
    }

    #[inline(always)]
    fn toggle(&mut self) -> Result<(), Infallible> {
        Pin::toggle(self);
        Ok(())
    }
}
