//! Actuator drivers, hardware initialisation, and peripheral helpers.

pub mod delay;
pub mod hw_init;
pub mod servo;
pub mod status_led;
