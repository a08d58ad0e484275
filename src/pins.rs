//! GPIO / peripheral pin assignments for the hatch controller board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Servo output
// ---------------------------------------------------------------------------

/// LEDC PWM output driving the hatch servo signal line.
pub const SERVO_PWM_GPIO: i32 = 4;

/// Servo refresh frequency — one pulse every 20 ms.
pub const SERVO_PWM_FREQ_HZ: u32 = 50;

/// LEDC timer resolution for the servo channel.  16 bits gives one duty
/// step per 0.305 µs at 50 Hz, finer than the 0.5 µs compare unit the
/// pulse table is expressed in.
pub const SERVO_PWM_RESOLUTION_BITS: u32 = 16;

// ---------------------------------------------------------------------------
// Status indicator
// ---------------------------------------------------------------------------

/// Digital output: status LED, active HIGH.
pub const STATUS_LED_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// I²C slave bus (command input)
// ---------------------------------------------------------------------------

pub const BUS_SDA_GPIO: i32 = 14;
pub const BUS_SCL_GPIO: i32 = 15;

// ---------------------------------------------------------------------------
// UART debug
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;
