//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (servo, indicator, delay primitive, event sinks)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly — and tests can replay a full dispatch sequence against
//! recording mocks, including every blocking wait.

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the actuators.
pub trait ActuatorPort {
    /// Command the servo to `angle` degrees.  Values ≥ 180 saturate to
    /// 179.  Fire-and-forget: the PWM peripheral picks the new compare
    /// value up asynchronously, and physical settling takes further
    /// periods — callers that need the hatch in position must wait.
    fn move_to(&mut self, angle: u8);

    /// Set the status indicator on or off.
    fn set_indicator(&mut self, on: bool);

    /// Invert the status indicator.
    fn toggle_indicator(&mut self);

    /// Current logical indicator state.
    fn indicator_on(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Delay port (the blocking wait primitive)
// ───────────────────────────────────────────────────────────────

/// Blocking delay in 16 ms ticks.  Command sequences are timed entirely
/// through this port, which is why it is a port at all: mocks record the
/// waits, so tests can assert sequence timing without wall-clock time.
pub trait DelayPort {
    /// Block the calling context for `ticks` × tick period.
    fn wait_ticks(&mut self, ticks: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
/// Adapters decide where they go (serial log today; anything later).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
