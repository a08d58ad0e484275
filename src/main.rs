//! Hatch Controller Firmware — Main Entry Point
//!
//! Hexagonal architecture: bus interrupt glue and drivers on the outside,
//! a pure command dispatcher in the middle.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                Adapters (outer ring)                 │
//! │                                                      │
//! │  HardwareAdapter      LogEventSink     TickDelay     │
//! │  (ActuatorPort)       (EventSink)      (DelayPort)   │
//! │                                                      │
//! │  ───────────── Port Trait Boundary ──────────────    │
//! │                                                      │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │            AppService (pure logic)             │  │
//! │  │  command decode · motion/blink sequences       │  │
//! │  └────────────────────────────────────────────────┘  │
//! │                                                      │
//! │  BusReceiver (ISR state machine) → command mailbox   │
//! └──────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
pub mod error;
pub mod events;
pub mod pins;

pub mod app;
pub mod adapters;
pub mod bus;
pub mod control;
pub mod drivers;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::{error, info};

use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use app::events::AppEvent;
use app::ports::{ActuatorPort, DelayPort, EventSink};
use app::service::AppService;
use config::SystemConfig;
use drivers::delay::TickDelay;
use events::{dropped_count, take_command};

/// Emit a stats event roughly once a minute of idle ticks.
const STATS_INTERVAL_TICKS: u32 = 3_750;

fn main() -> Result<()> {
    // ── 1. Platform bootstrap ─────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }

    info!("hatchctl v{}", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::default();
    config.validate()?;

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    if let Err(e) = drivers::hw_init::init_bus_responder(config.bus_address) {
        error!("bus responder init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Construct adapters + app service ───────────────────
    let mut hw = HardwareAdapter::new();
    let mut delay = TickDelay::new();
    let mut sink = LogEventSink::new();
    let mut app = AppService::new();

    // Attention sequence: blink, then park the hatch at the closed
    // stop so the mechanism starts from a known position.
    app.startup(config.startup_blink_count, &mut hw, &mut delay, &mut sink);

    info!("listening on bus address {:#04x}", config.bus_address);

    // ── 4. Idle loop ──────────────────────────────────────────
    //
    // One tick per iteration.  Commands surface through the mailbox
    // (fed by the bus receive path); between commands the status LED
    // toggles as a heartbeat.
    let mut idle_ticks: u32 = 0;
    let mut stats_ticks: u32 = 0;

    loop {
        drivers::hw_init::poll_bus(config.bus_address);

        if let Some(byte) = take_command() {
            app.handle_command(byte, &mut hw, &mut delay, &mut sink);
            idle_ticks = 0;
            continue;
        }

        delay.wait_ticks(1);

        idle_ticks += 1;
        if idle_ticks >= config.idle_toggle_ticks {
            hw.toggle_indicator();
            idle_ticks = 0;
        }

        stats_ticks += 1;
        if stats_ticks >= STATS_INTERVAL_TICKS {
            sink.emit(&AppEvent::Stats(app.stats(dropped_count())));
            stats_ticks = 0;
        }
    }
}
