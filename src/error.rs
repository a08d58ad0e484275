//! Unified error types for the hatch controller firmware.
//!
//! The command path itself is infallible by design — out-of-range angles
//! clamp, unknown command bytes have a defined behavior, and bus protocol
//! desyncs are absorbed by re-arming.  What remains fallible is peripheral
//! bring-up and configuration, funneled into one `Copy` enum so the
//! top-level error handling stays uniform.

use core::fmt;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Bus peripheral configuration failed (rc from the IDF driver).
    Bus(i32),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Bus(rc) => write!(f, "bus: driver error (rc={rc})"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
