//! GPIO lines for STM32F0
//!
//! A bus line is an `embassy_stm32` [`Flex`] pin switched between a floating
//! input and open-drain output. In open-drain mode a latched high level only
//! releases the line, so the master can never drive high against a slave
//! holding it low.

use embassy_stm32::gpio::{Flex, Pull, Speed};
use softwire_hal::FlexPin;

/// One line of a bit-banged bus with an external pull-up
pub struct OpenDrainLine<'d> {
    pin: Flex<'d>,
}

impl<'d> OpenDrainLine<'d> {
    /// Wrap a flex pin and leave it released
    ///
    /// Internal pull resistors stay disabled; the board provides the
    /// pull-ups. No interrupt is configured.
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_high();
        pin.set_as_input(Pull::None);
        Self { pin }
    }
}

impl FlexPin for OpenDrainLine<'_> {
    fn set_as_input(&mut self) {
        self.pin.set_as_input(Pull::None);
    }

    fn set_as_output(&mut self) {
        self.pin.set_as_input_output(Speed::Low);
    }

    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_high(&mut self) -> bool {
        self.pin.is_high()
    }
}
