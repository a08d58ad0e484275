//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — today that is the serial log.

use super::commands::CommandCode;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The service has started and armed the bus responder.
    Started,

    /// A command byte was accepted and its sequence is about to run.
    CommandAccepted { code: CommandCode },

    /// A command sequence ran to completion.
    CommandCompleted { code: CommandCode },

    /// Periodic activity summary.
    Stats(StatsSnapshot),
}

/// Point-in-time counters suitable for logging.
#[derive(Debug, Clone, Copy)]
pub struct StatsSnapshot {
    pub dispatched: u32,
    pub unrecognized: u32,
    pub dropped_while_busy: u32,
    pub last_angle: u8,
}
