use core::convert::Infallible;
use embedded_hal_02::digital::v2 as hal02;

use crate::regs::Registers;

use super::{Pin, PinState};

impl From<hal02::PinState> for PinState {
    #[inline(always)]
    fn from(value: hal02::PinState) -> Self {
        (value == hal02::PinState::High).into()
    }
}

impl From<PinState> for hal02::PinState {
    #[inline(always)]
    fn from(value: PinState) -> Self {
        value.is_high().into()
    }
}

impl<P, R, D> hal02::InputPin for Pin<'_, P, R, D>
where
    R: Registers,
{
    type Error = Infallible;

    #[inline(always)]
    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(Pin::get(self))
    }

    #[inline(always)]
    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(!Pin::get(self))
    }
}

impl<P, R, D> hal02::OutputPin for Pin<'_, P, R, D>
where
    R: Registers,
{
    type Error = Infallible;

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
    fn set_state(&mut self, state: hal02::PinState) -> Result<(), Infallible> {
        Pin::set_state(self, state.into());
        Ok(())
    }
}

impl<P, R, D> hal02::StatefulOutputPin for Pin<'_, P, R, D>
where
    R: Registers,
{
    #[inline(always)]
    fn is_set_high(&self) -> Result<bool, Infallible> {
        Ok(Pin::get(self))
    }

    #[inline(always)]
    fn is_set_low(&self) -> Result<bool, Infallible> {
        Ok(!Pin::get(self))
    }
}

impl<P, R, D> hal02::ToggleableOutputPin for Pin<'_, P, R, D>
where
    R: Registers,
{
    type Error = Infallible;

    #[inline(always)]
    fn toggle(&mut self) -> Result<(), Infallible> {
        Pin::toggle(self);
        Ok(())
    }
}
