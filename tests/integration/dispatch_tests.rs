//! End-to-end dispatcher tests: command byte in, exact actuation
//! sequence out, verified against the recording mocks.

use hatchctl::app::commands::CommandCode;
use hatchctl::app::events::AppEvent;
use hatchctl::app::ports::ActuatorPort;
use hatchctl::app::service::AppService;

use crate::mock_hw::{ActuatorCall, MockHardware, RecordingDelay, VecSink};

fn fixture() -> (AppService, MockHardware, RecordingDelay, VecSink) {
    (
        AppService::new(),
        MockHardware::new(),
        RecordingDelay::new(),
        VecSink::new(),
    )
}

#[test]
fn open_moves_to_zero_blinks_twice_then_settles() {
    let (mut app, mut hw, mut delay, mut sink) = fixture();
    app.handle_command(1, &mut hw, &mut delay, &mut sink);

    assert_eq!(hw.moves(), vec![0]);
    assert_eq!(hw.blink_cycles(), 2);
    assert_eq!(delay.waits.last(), Some(&50));
    // 2 blink cycles at 2 ticks each plus the settle wait.
    assert_eq!(delay.total_ticks(), 54);
}

#[test]
fn close_moves_to_stop_and_blinks_twenty_times() {
    let (mut app, mut hw, mut delay, mut sink) = fixture();
    app.handle_command(2, &mut hw, &mut delay, &mut sink);

    assert_eq!(hw.moves(), vec![179]);
    assert_eq!(hw.blink_cycles(), 20);
    assert_eq!(delay.waits.last(), Some(&50));
    assert_eq!(delay.total_ticks(), 90);
}

#[test]
fn twitch_runs_two_stage_motion_with_pause_between() {
    let (mut app, mut hw, mut delay, mut sink) = fixture();
    app.handle_command(3, &mut hw, &mut delay, &mut sink);

    assert_eq!(hw.moves(), vec![155, 179]);
    assert_eq!(hw.blink_cycles(), 5);
    // The pause sits between the two moves, before any blink wait.
    assert_eq!(delay.waits[0], 4);
    assert_eq!(delay.total_ticks(), 14);
    // No settle tail on a twitch.
    assert_eq!(delay.waits.last(), Some(&1));
}

#[test]
fn unrecognized_byte_never_moves_the_servo() {
    for byte in [0u8, 4, 42, 0xFF] {
        let (mut app, mut hw, mut delay, mut sink) = fixture();
        app.handle_command(byte, &mut hw, &mut delay, &mut sink);

        assert!(hw.moves().is_empty(), "servo moved for byte {byte:#04x}");
        assert_eq!(hw.blink_cycles(), 100);
        assert_eq!(delay.total_ticks(), 250);
        assert_eq!(app.stats(0).unrecognized, 1);
    }
}

#[test]
fn sequences_always_leave_indicator_off() {
    let (mut app, mut hw, mut delay, mut sink) = fixture();
    for byte in [1u8, 2, 3, 0x7F] {
        app.handle_command(byte, &mut hw, &mut delay, &mut sink);
        assert!(!hw.indicator_on());
    }
}

#[test]
fn repeated_open_is_idempotent_on_position() {
    let (mut app, mut hw, mut delay, mut sink) = fixture();
    app.handle_command(1, &mut hw, &mut delay, &mut sink);
    app.handle_command(1, &mut hw, &mut delay, &mut sink);

    assert_eq!(hw.moves(), vec![0, 0]);
    assert_eq!(app.last_angle(), 0);
    assert_eq!(app.dispatched(), 2);
}

#[test]
fn startup_blinks_then_parks_closed() {
    let (mut app, mut hw, mut delay, mut sink) = fixture();
    app.startup(10, &mut hw, &mut delay, &mut sink);

    assert_eq!(hw.blink_cycles(), 10);
    // The park move comes after the attention blinks.
    assert_eq!(hw.calls.last(), Some(&ActuatorCall::MoveTo(0)));
    assert!(matches!(sink.events.as_slice(), [AppEvent::Started]));
}

#[test]
fn event_stream_brackets_every_dispatch() {
    let (mut app, mut hw, mut delay, mut sink) = fixture();
    app.handle_command(2, &mut hw, &mut delay, &mut sink);
    app.handle_command(9, &mut hw, &mut delay, &mut sink);

    let codes: Vec<_> = sink
        .events
        .iter()
        .map(|e| match e {
            AppEvent::CommandAccepted { code } => ("accepted", *code),
            AppEvent::CommandCompleted { code } => ("completed", *code),
            other => panic!("unexpected event {other:?}"),
        })
        .collect();

    assert_eq!(
        codes,
        vec![
            ("accepted", CommandCode::Close),
            ("completed", CommandCode::Close),
            ("accepted", CommandCode::Unrecognized(9)),
            ("completed", CommandCode::Unrecognized(9)),
        ]
    );
}

#[test]
fn stats_snapshot_reflects_counters() {
    let (mut app, mut hw, mut delay, mut sink) = fixture();
    app.handle_command(3, &mut hw, &mut delay, &mut sink);
    app.handle_command(0xAA, &mut hw, &mut delay, &mut sink);

    let s = app.stats(7);
    assert_eq!(s.dispatched, 2);
    assert_eq!(s.unrecognized, 1);
    assert_eq!(s.dropped_while_busy, 7);
    assert_eq!(s.last_angle, 179);
}
