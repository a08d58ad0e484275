//! Event sink that forwards application events to the log facade.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => info!("controller ready, hatch parked"),
            AppEvent::CommandAccepted { code } => info!("command accepted: {:?}", code),
            AppEvent::CommandCompleted { code } => info!("command completed: {:?}", code),
            AppEvent::Stats(s) => {
                if s.unrecognized > 0 || s.dropped_while_busy > 0 {
                    warn!(
                        "stats: dispatched={} unrecognized={} dropped={} angle={}",
                        s.dispatched, s.unrecognized, s.dropped_while_busy, s.last_angle
                    );
                } else {
                    info!(
                        "stats: dispatched={} angle={}",
                        s.dispatched, s.last_angle
                    );
                }
            }
        }
    }
}
