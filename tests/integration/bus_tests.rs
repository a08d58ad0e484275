//! Bus receive path tests: raw status events in, mailbox contents out.
//!
//! These exercise the real interrupt-side glue (`dispatch_bus_event`),
//! not just the pure state machine, so they cover the atomic state
//! round-trip, the mailbox handoff, and the re-arm accounting.

use std::sync::Mutex;

use hatchctl::bus::status::{
    ST_ADDRESSED_WRITE, ST_BUS_ERROR, ST_DATA_ACKED, ST_DATA_NACKED, ST_STOP,
};
use hatchctl::bus::BusState;
use hatchctl::drivers::hw_init::{bus_reset_for_test, bus_state, dispatch_bus_event, rearm_count};
use hatchctl::events::{dropped_count, take_command};

// The responder state and mailbox are process-global; serialise.
static BUS_LOCK: Mutex<()> = Mutex::new(());

fn reset() {
    bus_reset_for_test();
    while take_command().is_some() {}
}

fn send_transaction(byte: u8) {
    dispatch_bus_event(ST_ADDRESSED_WRITE, 0);
    dispatch_bus_event(ST_DATA_ACKED, byte);
    dispatch_bus_event(ST_STOP, 0);
}

#[test]
fn transaction_delivers_first_byte_to_mailbox() {
    let _guard = BUS_LOCK.lock().unwrap();
    reset();

    send_transaction(2);
    assert_eq!(take_command(), Some(2));
    assert_eq!(bus_state(), BusState::Idle);
}

#[test]
fn only_first_byte_of_a_transaction_counts() {
    let _guard = BUS_LOCK.lock().unwrap();
    reset();

    dispatch_bus_event(ST_ADDRESSED_WRITE, 0);
    dispatch_bus_event(ST_DATA_ACKED, 3);
    dispatch_bus_event(ST_DATA_ACKED, 9);
    dispatch_bus_event(ST_DATA_ACKED, 1);
    dispatch_bus_event(ST_STOP, 0);

    assert_eq!(take_command(), Some(3));
    assert_eq!(take_command(), None);
}

#[test]
fn bus_error_aborts_without_delivery() {
    let _guard = BUS_LOCK.lock().unwrap();
    reset();

    dispatch_bus_event(ST_ADDRESSED_WRITE, 0);
    dispatch_bus_event(ST_BUS_ERROR, 0);

    assert_eq!(bus_state(), BusState::Idle);
    assert_eq!(take_command(), None);

    // A clean transaction afterwards still works.
    send_transaction(1);
    assert_eq!(take_command(), Some(1));
}

#[test]
fn nacked_data_ends_transaction_without_delivery() {
    let _guard = BUS_LOCK.lock().unwrap();
    reset();

    dispatch_bus_event(ST_ADDRESSED_WRITE, 0);
    dispatch_bus_event(ST_DATA_NACKED, 5);

    assert_eq!(bus_state(), BusState::Idle);
    assert_eq!(take_command(), None);
}

#[test]
fn byte_arriving_while_mailbox_full_is_dropped_and_counted() {
    let _guard = BUS_LOCK.lock().unwrap();
    reset();
    let dropped_before = dropped_count();

    send_transaction(1);
    // Main loop has not drained yet; a second command arrives.
    send_transaction(2);

    assert_eq!(dropped_count(), dropped_before + 1);
    assert_eq!(take_command(), Some(1));
    assert_eq!(take_command(), None);
}

#[test]
fn every_event_rearms_the_peripheral() {
    let _guard = BUS_LOCK.lock().unwrap();
    reset();
    let before = rearm_count();

    // Mix of well-formed traffic, noise, and error paths.
    let events = [
        (ST_ADDRESSED_WRITE, 0),
        (ST_DATA_ACKED, 2),
        (ST_STOP, 0),
        (0xF8, 0),
        (ST_BUS_ERROR, 0),
        (ST_DATA_ACKED, 7), // data with no preceding address
        (ST_STOP, 0),
    ];
    for (status, data) in events {
        dispatch_bus_event(status, data);
    }

    assert_eq!(rearm_count() - before, events.len() as u32);
    while take_command().is_some() {}
}
