//! Inbound command codes.
//!
//! One byte per bus transaction.  Three codes are recognised; everything
//! else — including zero — maps to [`CommandCode::Unrecognized`], which
//! is a defined behavior (a long warning blink), not an error path.

/// Decoded command, one per received bus byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCode {
    /// Swing the hatch fully open (0°).
    Open,
    /// Swing the hatch fully closed (179°).
    Close,
    /// Short double-move "twitch" gesture.
    Twitch,
    /// Any byte outside the recognised set; carries the raw byte for
    /// logging.
    Unrecognized(u8),
}

impl CommandCode {
    /// Wire encoding: 1 = Open, 2 = Close, 3 = Twitch.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            1 => Self::Open,
            2 => Self::Close,
            3 => Self::Twitch,
            other => Self::Unrecognized(other),
        }
    }
}
