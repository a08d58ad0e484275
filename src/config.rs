//! System configuration parameters
//!
//! All tunable parameters for the hatch controller.  The command
//! sequences themselves are fixed behavior, not configuration — only
//! addressing and timing cadence live here.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Bus ---
    /// 7-bit I2C responder address this device answers to.
    pub bus_address: u8,

    // --- Timing ---
    /// Base delay granularity in milliseconds.  Every wait in a command
    /// sequence is a multiple of this tick.
    pub tick_ms: u32,
    /// Idle-loop cadence: indicator toggles once per this many ticks.
    pub idle_toggle_ticks: u32,

    // --- Startup ---
    /// Attention blinks emitted once at boot before arming the bus.
    pub startup_blink_count: u32,
}

impl SystemConfig {
    /// Reject configurations the hardware cannot honour before any
    /// peripheral touches them.
    pub fn validate(&self) -> Result<()> {
        if self.bus_address >= 0x80 {
            return Err(Error::Config("bus address must fit 7 bits"));
        }
        if self.bus_address < 0x08 {
            return Err(Error::Config("bus addresses below 0x08 are reserved"));
        }
        if self.tick_ms == 0 || self.idle_toggle_ticks == 0 {
            return Err(Error::Config("timing parameters must be non-zero"));
        }
        Ok(())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            bus_address: 0x10,
            tick_ms: 16,
            idle_toggle_ticks: 31, // ~500 ms
            startup_blink_count: 10,
        }
    }
}
