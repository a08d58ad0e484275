//! Hatch servo driver.
//!
//! Owns the commanded angle and translates it to a timer-compare write
//! through [`hw_init::servo_set_compare`].  The PWM peripheral reads
//! the compare register asynchronously every 20 ms period, so a move is
//! fire-and-forget: callers that need the hatch physically in position
//! must wait themselves (the dispatcher's sequences do).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the LEDC duty register via hw_init.
//! On host/test: tracks state in-memory only.

use crate::control::pulse::{pulse_for, MAX_ANGLE};
use crate::drivers::hw_init;

pub struct ServoDriver {
    angle: u8,
    compare: u16,
}

impl ServoDriver {
    /// Construct without commanding the servo; the first `move_to`
    /// establishes a known position.
    pub fn new() -> Self {
        Self {
            angle: 0,
            compare: pulse_for(0),
        }
    }

    /// Command the servo to `angle` degrees.  Angles ≥ 180 saturate to
    /// 179.  Always succeeds; motion happens over subsequent periods.
    pub fn move_to(&mut self, angle: u8) {
        let deg = angle.min(MAX_ANGLE);
        let compare = pulse_for(deg);
        hw_init::servo_set_compare(compare);
        self.angle = deg;
        self.compare = compare;
    }

    /// Last commanded angle in degrees.
    pub fn angle(&self) -> u8 {
        self.angle
    }

    /// Last compare value written to the PWM peripheral.
    pub fn compare(&self) -> u16 {
        self.compare
    }
}

impl Default for ServoDriver {
    fn default() -> Self {
        Self::new()
    }
}
