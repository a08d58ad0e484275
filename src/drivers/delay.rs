//! The blocking delay primitive.
//!
//! Every wait in the firmware is a multiple of one 16 ms tick.  On the
//! device this is a busy-wait (`esp_rom_delay_us`) — it does not yield
//! the CPU, matching the timing contract the command sequences were
//! tuned against.  On host targets it sleeps, which is close enough for
//! the simulated main loop; tests never use this type at all, they
//! substitute a recording `DelayPort` mock.

use embedded_hal::delay::DelayNs;

use crate::app::ports::DelayPort;

/// Milliseconds per tick.
pub const TICK_MS: u32 = 16;

/// Concrete tick-granularity delay provider.
pub struct TickDelay;

impl TickDelay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TickDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayNs for TickDelay {
    #[cfg(target_os = "espidf")]
    fn delay_ns(&mut self, ns: u32) {
        // Busy-wait; esp_rom_delay_us is safe from any context.
        let us = ns.div_ceil(1_000);
        unsafe { esp_idf_svc::sys::esp_rom_delay_us(us) };
    }

    #[cfg(not(target_os = "espidf"))]
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }
}

impl DelayPort for TickDelay {
    fn wait_ticks(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.delay_ms(TICK_MS);
        }
    }
}
