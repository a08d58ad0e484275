//! ISR → main-loop command mailbox.
//!
//! The bus ISR must never block: a dispatch sequence takes hundreds of
//! milliseconds of busy-waiting, and running it in interrupt context
//! would stall the bus peripheral (or the whole core).  Instead the ISR
//! deposits the received command byte here and returns; the main loop
//! picks it up between idle ticks.
//!
//! ```text
//! ┌─────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │  Bus ISR    │────▶│  1-slot mailbox   │────▶│  Main loop   │
//! │ (producer)  │     │  (lock-free CAS)  │     │  (consumer)  │
//! └─────────────┘     └───────────────────┘     └──────────────┘
//! ```
//!
//! Capacity is deliberately one: at most one command is queued behind
//! the currently running sequence, and further bus activity is dropped
//! (and counted) until the slot drains.  Commands are not something to
//! backlog — a stale "open" arriving after three newer commands is
//! worse than a dropped one.

use core::sync::atomic::{AtomicU16, AtomicU32, Ordering};

/// Bit 8 set = slot occupied; low byte = the pending command.
const OCCUPIED: u16 = 0x100;

static SLOT: AtomicU16 = AtomicU16::new(0);
static DROPPED: AtomicU32 = AtomicU32::new(0);

/// Offer a command byte from ISR context.
/// Lock-free; returns `false` (and counts the drop) if a command is
/// already pending.
pub fn offer_command(byte: u8) -> bool {
    let new = OCCUPIED | u16::from(byte);
    match SLOT.compare_exchange(0, new, Ordering::AcqRel, Ordering::Relaxed) {
        Ok(_) => true,
        Err(_) => {
            DROPPED.fetch_add(1, Ordering::Relaxed);
            false
        }
    }
}

/// Take the pending command, if any.  Called from the main loop
/// (single consumer).
pub fn take_command() -> Option<u8> {
    let prev = SLOT.swap(0, Ordering::AcqRel);
    if prev & OCCUPIED != 0 {
        Some((prev & 0xFF) as u8)
    } else {
        None
    }
}

/// Whether a command is waiting without consuming it.
pub fn command_pending() -> bool {
    SLOT.load(Ordering::Acquire) & OCCUPIED != 0
}

/// Total command bytes dropped because the slot was full.
pub fn dropped_count() -> u32 {
    DROPPED.load(Ordering::Relaxed)
}
