//! Status LED driver.
//!
//! The logical on/off state is the one piece of data touched from two
//! execution contexts: command sequences (main loop) and the idle loop's
//! periodic toggle.  It is held in an `AtomicBool`, and `toggle()` is a
//! single `fetch_xor`, so concurrent toggles can interleave in either
//! order but can never tear or lose an update.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the LED GPIO via hw_init.
//! On host/test: tracks state in-memory only.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::drivers::hw_init;
use crate::pins;

pub struct StatusLed {
    on: AtomicBool,
}

impl StatusLed {
    pub fn new() -> Self {
        Self {
            on: AtomicBool::new(false),
        }
    }

    pub fn set(&self, on: bool) {
        self.on.store(on, Ordering::Release);
        hw_init::gpio_write(pins::STATUS_LED_GPIO, on);
    }

    pub fn toggle(&self) {
        let was = self.on.fetch_xor(true, Ordering::AcqRel);
        hw_init::gpio_write(pins::STATUS_LED_GPIO, !was);
    }

    pub fn is_on(&self) -> bool {
        self.on.load(Ordering::Acquire)
    }
}

impl Default for StatusLed {
    fn default() -> Self {
        Self::new()
    }
}
