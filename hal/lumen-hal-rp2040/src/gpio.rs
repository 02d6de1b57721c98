//! GPIO output lines

use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::Peri;
use lumen_hal::OutputPin;

/// Push-pull output driven through embassy's `Output`
pub struct Line<'d> {
    pin: Output<'d>,
}

impl<'d> Line<'d> {
    /// Configure `pin` as an output at `initial`
    pub fn new(pin: Peri<'d, impl Pin>, initial: Level) -> Self {
        Self {
            pin: Output::new(pin, initial),
        }
    }
}

impl OutputPin for Line<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
