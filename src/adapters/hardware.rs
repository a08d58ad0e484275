//! Hardware adapter: binds the [`ActuatorPort`] to the real drivers.
//!
//! The application core only sees the port trait; this adapter is the
//! single place where servo and LED driver ownership lives.

use crate::app::ports::ActuatorPort;
use crate::drivers::servo::ServoDriver;
use crate::drivers::status_led::StatusLed;

pub struct HardwareAdapter {
    servo: ServoDriver,
    led: StatusLed,
}

impl HardwareAdapter {
    pub fn new() -> Self {
        Self {
            servo: ServoDriver::new(),
            led: StatusLed::new(),
        }
    }

    /// Shared handle to the status LED for the idle loop's heartbeat
    /// toggle.  The LED state is atomic, so handing out a reference
    /// alongside the port is safe.
    pub fn led(&self) -> &StatusLed {
        &self.led
    }

    pub fn servo(&self) -> &ServoDriver {
        &self.servo
    }
}

impl Default for HardwareAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ActuatorPort for HardwareAdapter {
    fn move_to(&mut self, angle: u8) {
        self.servo.move_to(angle);
    }

    fn set_indicator(&mut self, on: bool) {
        self.led.set(on);
    }

    fn toggle_indicator(&mut self) {
        self.led.toggle();
    }

    fn indicator_on(&self) -> bool {
        self.led.is_on()
    }
}
