//! Application service — the command dispatcher.
//!
//! [`AppService`] turns a received command byte into its fixed, blocking
//! actuation sequence.  Each dispatch is entered fresh: no state is
//! retained between commands, there is no cancellation, and a started
//! sequence always runs to completion.  All hardware access flows
//! through the port traits injected at call sites.
//!
//! ```text
//!                 ┌────────────────────┐
//!   bus byte ───▶ │     AppService     │ ───▶ EventSink
//!                 │  decode · sequence │ ───▶ DelayPort
//!                 └────────────────────┘
//!                           │
//!                           ▼
//!                      ActuatorPort
//! ```
//!
//! | Command      | Sequence                                            |
//! |--------------|-----------------------------------------------------|
//! | Open         | move_to(0); blink ×2; wait 50 ticks                 |
//! | Close        | move_to(179); blink ×20; wait 50 ticks              |
//! | Twitch       | move_to(155); wait 4; move_to(179); blink ×5        |
//! | Unrecognized | blink ×100; wait 50 ticks                           |
//!
//! One tick is 16 ms; every blink is 1 tick on, 1 tick off.

use log::info;

use crate::control::pulse::MAX_ANGLE;

use super::commands::CommandCode;
use super::events::{AppEvent, StatsSnapshot};
use super::ports::{ActuatorPort, DelayPort, EventSink};

/// Ticks of settle time appended to Open, Close, and Unrecognized.
const SETTLE_TICKS: u32 = 50;

/// Ticks between the two moves of a twitch.
const TWITCH_PAUSE_TICKS: u32 = 4;

/// First angle of the twitch gesture.
const TWITCH_ANGLE: u8 = 155;

/// The application service orchestrates command dispatch.
pub struct AppService {
    dispatched: u32,
    unrecognized: u32,
    last_angle: u8,
}

impl AppService {
    pub fn new() -> Self {
        Self {
            dispatched: 0,
            unrecognized: 0,
            last_angle: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Run the boot attention sequence: `blinks` indicator flashes, then
    /// park the hatch closed at 0°.
    pub fn startup(
        &mut self,
        blinks: u32,
        hw: &mut impl ActuatorPort,
        delay: &mut impl DelayPort,
        sink: &mut impl EventSink,
    ) {
        self.blink(hw, delay, blinks);
        hw.move_to(0);
        self.last_angle = 0;
        sink.emit(&AppEvent::Started);
        info!("AppService started, hatch parked at 0°");
    }

    // ── Command handling ──────────────────────────────────────

    /// Decode `byte` and run its sequence to completion, blocking the
    /// calling context for the full duration.
    pub fn handle_command(
        &mut self,
        byte: u8,
        hw: &mut impl ActuatorPort,
        delay: &mut impl DelayPort,
        sink: &mut impl EventSink,
    ) {
        let code = CommandCode::from_byte(byte);
        sink.emit(&AppEvent::CommandAccepted { code });
        info!("dispatch: {:?} (byte={:#04x})", code, byte);

        match code {
            CommandCode::Open => {
                self.move_to(hw, 0);
                self.blink(hw, delay, 2);
                delay.wait_ticks(SETTLE_TICKS);
            }
            CommandCode::Close => {
                self.move_to(hw, MAX_ANGLE);
                self.blink(hw, delay, 20);
                delay.wait_ticks(SETTLE_TICKS);
            }
            CommandCode::Twitch => {
                self.move_to(hw, TWITCH_ANGLE);
                delay.wait_ticks(TWITCH_PAUSE_TICKS);
                self.move_to(hw, MAX_ANGLE);
                self.blink(hw, delay, 5);
            }
            CommandCode::Unrecognized(_) => {
                self.unrecognized += 1;
                self.blink(hw, delay, 100);
                delay.wait_ticks(SETTLE_TICKS);
            }
        }

        self.dispatched += 1;
        sink.emit(&AppEvent::CommandCompleted { code });
    }

    // ── Queries ───────────────────────────────────────────────

    /// Counter snapshot for periodic logging.
    /// `dropped_while_busy` comes from the ISR mailbox, which the
    /// service does not own.
    pub fn stats(&self, dropped_while_busy: u32) -> StatsSnapshot {
        StatsSnapshot {
            dispatched: self.dispatched,
            unrecognized: self.unrecognized,
            dropped_while_busy,
            last_angle: self.last_angle,
        }
    }

    /// Total commands dispatched since boot.
    pub fn dispatched(&self) -> u32 {
        self.dispatched
    }

    /// Last angle commanded to the servo.
    pub fn last_angle(&self) -> u8 {
        self.last_angle
    }

    // ── Internal ──────────────────────────────────────────────

    fn move_to(&mut self, hw: &mut impl ActuatorPort, angle: u8) {
        hw.move_to(angle);
        self.last_angle = angle.min(MAX_ANGLE);
    }

    /// `count` indicator cycles: on, 1 tick, off, 1 tick.
    fn blink(&self, hw: &mut impl ActuatorPort, delay: &mut impl DelayPort, count: u32) {
        for _ in 0..count {
            hw.set_indicator(true);
            delay.wait_ticks(1);
            hw.set_indicator(false);
            delay.wait_ticks(1);
        }
    }
}

impl Default for AppService {
    fn default() -> Self {
        Self::new()
    }
}
