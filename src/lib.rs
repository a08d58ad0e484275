//! Hatch controller library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod bus;
pub mod config;
pub mod control;
pub mod events;

pub mod error;
pub mod pins;

// Adapter and driver modules carry their own cfg guards; the host
// build compiles them with in-memory stand-ins for register writes.
pub mod adapters;
pub mod drivers;
