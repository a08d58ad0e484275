//! Raw bus status decoding.
//!
//! The bus peripheral reports a status byte on every event.  This module
//! translates those hardware codes into the [`BusEvent`] enum so the
//! receiver state machine never branches on raw register values — the
//! transition table stays independent of the hardware encoding.
//!
//! The codes follow the classic two-wire (TWI) slave-receiver status
//! values; anything outside the recognised set is surfaced as
//! [`BusEvent::Unexpected`] and treated as protocol noise.

/// Own address received with write bit, acknowledge returned.
pub const ST_ADDRESSED_WRITE: u8 = 0x60;
/// Own address received after arbitration loss, acknowledge returned.
pub const ST_ADDRESSED_ARB_LOST: u8 = 0x68;
/// Data byte received while addressed, acknowledge returned.
pub const ST_DATA_ACKED: u8 = 0x80;
/// Data byte received while addressed, no acknowledge returned.
pub const ST_DATA_NACKED: u8 = 0x88;
/// Stop or repeated-start condition while addressed.
pub const ST_STOP: u8 = 0xA0;
/// Illegal start/stop — bus error.
pub const ST_BUS_ERROR: u8 = 0x00;

/// A decoded bus event, independent of the hardware status encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    /// The controller addressed us for a write; ack was sent.
    AddressedWrite,
    /// A data byte arrived and was acknowledged.
    DataReceived(u8),
    /// The controller ended the transaction.
    Stop,
    /// Illegal bus condition.
    BusError,
    /// Any status code this core does not recognise.
    Unexpected(u8),
}

impl BusEvent {
    /// Decode a raw status byte (plus the data register contents, which
    /// are only meaningful for data-received codes).
    pub fn decode(status: u8, data: u8) -> Self {
        match status {
            ST_ADDRESSED_WRITE | ST_ADDRESSED_ARB_LOST => Self::AddressedWrite,
            ST_DATA_ACKED => Self::DataReceived(data),
            // A NACKed data byte was still clocked in, but the controller
            // has been told to stop — treat it as end of transaction.
            ST_DATA_NACKED | ST_STOP => Self::Stop,
            ST_BUS_ERROR => Self::BusError,
            other => Self::Unexpected(other),
        }
    }
}
