//! Two-wire bus responder state machine.
//!
//! The receiver accepts exactly one command byte per write transaction:
//!
//! ```text
//!          AddressedWrite            DataReceived(b)
//!  IDLE ───────────────▶ ADDRESS_MATCHED ───────────▶ DATA_RECEIVED
//!    ▲                                  │ deliver b        │
//!    │         Stop / BusError / Unexpected                │ extra bytes
//!    └──────────────────────────────────────────────◀──────┘ absorbed
//! ```
//!
//! Every event — including protocol errors and codes this core does not
//! recognise — produces exactly one re-arm with acknowledgment enabled.
//! If the peripheral is ever left un-armed it stalls the bus for good,
//! so [`BusAction`] makes the re-arm a structural field: there is no
//! code path that constructs an action without it.
//!
//! The machine itself is pure (no hardware access, no logging side
//! effects beyond `debug!` on desync) so it can be driven exhaustively
//! by host tests.  The ISR keeps it in a single `AtomicU8` via
//! [`BusState::to_raw`] / [`BusState::from_raw`].

pub mod status;

use log::debug;
use status::BusEvent;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Receiver transaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BusState {
    /// Armed, waiting to be addressed.
    Idle = 0,
    /// Our address was acknowledged; the next data byte is the command.
    AddressMatched = 1,
    /// Command byte consumed; remaining bytes of this write are absorbed.
    DataReceived = 2,
}

impl BusState {
    /// Pack for storage in an `AtomicU8` (ISR context).
    pub const fn to_raw(self) -> u8 {
        self as u8
    }

    /// Unpack; unknown raw values collapse to `Idle`, the safe re-arm
    /// baseline.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::AddressMatched,
            2 => Self::DataReceived,
            _ => Self::Idle,
        }
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// What the caller must do after an event: always re-arm, sometimes
/// hand a received command byte to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusAction {
    /// Always `true` — kept as data (rather than implied) so tests can
    /// assert the invariant over every representable status code.
    pub rearm: bool,
    /// Command byte to deliver, if this event completed one.
    pub deliver: Option<u8>,
}

impl BusAction {
    const fn rearm_only() -> Self {
        Self {
            rearm: true,
            deliver: None,
        }
    }

    const fn deliver(byte: u8) -> Self {
        Self {
            rearm: true,
            deliver: Some(byte),
        }
    }
}

// ---------------------------------------------------------------------------
// Receiver
// ---------------------------------------------------------------------------

/// The bus responder state machine.  Runs for the lifetime of the
/// process; there is no terminal state.
#[derive(Debug)]
pub struct BusReceiver {
    state: BusState,
}

impl BusReceiver {
    pub const fn new() -> Self {
        Self {
            state: BusState::Idle,
        }
    }

    /// Rebuild from a packed state (see [`BusState::from_raw`]).
    pub fn from_state(state: BusState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> BusState {
        self.state
    }

    /// Feed one decoded bus event through the transition table.
    ///
    /// Protocol desyncs carry no recovery action: the transaction state
    /// is discarded and the responder goes back to listening.
    pub fn on_event(&mut self, event: BusEvent) -> BusAction {
        match (self.state, event) {
            (BusState::Idle, BusEvent::AddressedWrite) => {
                self.state = BusState::AddressMatched;
                BusAction::rearm_only()
            }
            (BusState::AddressMatched, BusEvent::DataReceived(byte)) => {
                self.state = BusState::DataReceived;
                BusAction::deliver(byte)
            }
            // Only the first byte of a write is the command; the rest of
            // the transaction is acknowledged and discarded.
            (BusState::DataReceived, BusEvent::DataReceived(_)) => BusAction::rearm_only(),
            (_, BusEvent::Stop) => {
                self.state = BusState::Idle;
                BusAction::rearm_only()
            }
            // Everything else is a desync: data with no address match,
            // an address while mid-transaction, a bus error, or a status
            // code we do not recognise.
            (state, event) => {
                debug!("bus: desync in {:?} on {:?}, re-arming", state, event);
                self.state = BusState::Idle;
                BusAction::rearm_only()
            }
        }
    }

    /// Convenience for the ISR path: decode a raw status/data pair and
    /// run it through the machine in one call.
    pub fn on_raw(&mut self, raw_status: u8, data: u8) -> BusAction {
        self.on_event(BusEvent::decode(raw_status, data))
    }
}

impl Default for BusReceiver {
    fn default() -> Self {
        Self::new()
    }
}
