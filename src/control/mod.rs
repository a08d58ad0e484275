//! Pure control math — no hardware, no I/O.

pub mod pulse;
