//! Recording mock hardware for integration tests.
//!
//! Every port call is appended to a call log so tests can assert the
//! exact actuation sequence a command produces, not just its end state.

use hatchctl::app::events::AppEvent;
use hatchctl::app::ports::{ActuatorPort, DelayPort, EventSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    MoveTo(u8),
    IndicatorSet(bool),
    IndicatorToggle,
}

#[derive(Default)]
pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
    indicator: bool,
}

impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Angles passed to `move_to`, in order.
    pub fn moves(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActuatorCall::MoveTo(a) => Some(*a),
                _ => None,
            })
            .collect()
    }

    /// Number of complete on→off indicator cycles in the call log.
    pub fn blink_cycles(&self) -> usize {
        self.calls
            .windows(2)
            .filter(|w| {
                w[0] == ActuatorCall::IndicatorSet(true) && w[1] == ActuatorCall::IndicatorSet(false)
            })
            .count()
    }
}

impl ActuatorPort for MockHardware {
    fn move_to(&mut self, angle: u8) {
        self.calls.push(ActuatorCall::MoveTo(angle));
    }

    fn set_indicator(&mut self, on: bool) {
        self.indicator = on;
        self.calls.push(ActuatorCall::IndicatorSet(on));
    }

    fn toggle_indicator(&mut self) {
        self.indicator = !self.indicator;
        self.calls.push(ActuatorCall::IndicatorToggle);
    }

    fn indicator_on(&self) -> bool {
        self.indicator
    }
}

/// Delay that records every wait instead of sleeping.
#[derive(Default)]
pub struct RecordingDelay {
    pub waits: Vec<u32>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ticks(&self) -> u64 {
        self.waits.iter().map(|&t| u64::from(t)).sum()
    }
}

impl DelayPort for RecordingDelay {
    fn wait_ticks(&mut self, ticks: u32) {
        self.waits.push(ticks);
    }
}

#[derive(Default)]
pub struct VecSink {
    pub events: Vec<AppEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for VecSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
