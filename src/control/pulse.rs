//! Angle → timer-compare mapping for the hatch servo.
//!
//! The servo signal is a 20 ms-period PWM whose high time encodes the
//! commanded angle.  Compare values are expressed in 0.5 µs timer ticks:
//! 2000 ticks = 1.0 ms (fully closed), 3988 ticks ≈ 1.994 ms (fully open).
//!
//! The table is generated at compile time by linear interpolation between
//! [`MIN_PULSE`] and [`MAX_PULSE`], one entry per degree.  Inputs at or
//! above 180° saturate to 179° — out-of-range commands move the hatch to
//! the end stop instead of being rejected.

/// Compare value for 0° (minimum pulse width, hatch fully closed).
pub const MIN_PULSE: u16 = 2000;

/// Compare value for 179° (maximum pulse width, hatch fully open).
pub const MAX_PULSE: u16 = 3988;

/// Number of table entries — one per degree in [0, 179].
pub const STEPS: usize = 180;

/// Highest valid angle in degrees.
pub const MAX_ANGLE: u8 = (STEPS - 1) as u8;

/// Precomputed angle→compare table, indexed by degrees.
static PULSE_TABLE: [u16; STEPS] = build_table(MIN_PULSE, MAX_PULSE);

/// Linear interpolation with round-to-nearest, evaluated at compile time.
const fn build_table(min: u16, max: u16) -> [u16; STEPS] {
    let span = (max - min) as u32;
    let last = (STEPS - 1) as u32;
    let mut table = [0u16; STEPS];
    let mut i = 0;
    while i < STEPS {
        let offset = (i as u32 * span + last / 2) / last;
        table[i] = min + offset as u16;
        i += 1;
    }
    table
}

/// Look up the timer-compare value for `angle` degrees.
///
/// Angles above [`MAX_ANGLE`] are clamped, never rejected.  Pure and
/// infallible — the table covers the whole input domain.
pub fn pulse_for(angle: u8) -> u16 {
    let deg = angle.min(MAX_ANGLE);
    PULSE_TABLE[deg as usize]
}
