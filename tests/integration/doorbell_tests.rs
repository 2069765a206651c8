//! End-to-end doorbell scenarios against mock outputs.
//!
//! Reference timing: D=10, capacity 500, minimum playback 100,
//! light period 20, bell period 5, one-tick bell pulse.  Every scenario
//! idles first so the ring budget is full (tick 520) before the press.

use doorbell::app::events::DoorbellEvent;

use super::mock_hw::{OutputCall, Rig};

/// Fill the bucket, then press for `press` ticks and release.
fn press_and_release(rig: &mut Rig, press: usize, release: usize) {
    rig.fill_bucket();
    rig.hold(true, press);
    rig.hold(false, release);
}

#[test]
fn short_press_plays_minimum_duration() {
    let mut rig = Rig::reference();
    press_and_release(&mut rig, 30, 200);

    // Press latched at 530, release at 560, stop honoured at 630.
    assert_eq!(
        rig.sink.events,
        vec![
            DoorbellEvent::Pressed { granted_ticks: 500 },
            DoorbellEvent::Released { held_ticks: 30 },
            DoorbellEvent::StopHonored { played_ticks: 101 },
            DoorbellEvent::PlaybackFinished { played_ticks: 101 },
        ]
    );
    assert!(!rig.doorbell.is_playing());

    // Toggles fall on remaining counts 500, 480, ..., 420.
    assert_eq!(
        rig.out.ticks_of(OutputCall::LightToggle),
        vec![530, 550, 570, 590, 610]
    );
    assert_eq!(rig.out.ticks_of(OutputCall::LightOff), vec![630]);
    assert!(!rig.out.light);
}

#[test]
fn bell_pulse_is_released_on_the_next_tick() {
    let mut rig = Rig::reference();
    press_and_release(&mut rig, 30, 200);

    let on = rig.out.ticks_of(OutputCall::BellOn);
    let off = rig.out.ticks_of(OutputCall::BellOff);

    assert_eq!(on.len(), 20);
    assert_eq!(on.first(), Some(&530));
    assert!(on.windows(2).all(|w| w[1] - w[0] == 5));
    assert_eq!(off, on.iter().map(|t| t + 1).collect::<Vec<_>>());
    assert!(!rig.out.bell);
}

#[test]
fn bell_coil_energised_only_for_the_pulse() {
    let mut rig = Rig::reference();
    rig.fill_bucket();
    rig.hold(true, 10);

    // Remaining count 500 strikes on the press tick itself.
    assert_eq!(rig.now(), 530);
    assert!(rig.doorbell.bell_energised());
    assert!(rig.out.bell);

    rig.step(true);
    assert!(!rig.doorbell.bell_energised());
    assert!(!rig.out.bell);
}

#[test]
fn held_press_plays_full_budget_pattern() {
    let mut rig = Rig::reference();
    rig.fill_bucket();
    rig.hold(true, 10);

    // Full budget loaded at the press instant; one tick already played.
    assert_eq!(rig.sink.events, vec![DoorbellEvent::Pressed { granted_ticks: 500 }]);
    assert_eq!(rig.doorbell.playback().countdown, 499);

    rig.hold(true, 590);
    assert_eq!(rig.doorbell.credit(), 0);
    rig.hold(false, 200);

    // Tick 530 + (500 - r) plays remaining count r.
    let tick_of = |remaining: u32| 530 + (500 - remaining);
    let toggles: Vec<u32> = (1..=500).rev().filter(|r| r % 20 == 0).map(tick_of).collect();
    let strikes: Vec<u32> = (1..=500).rev().filter(|r| r % 5 == 0).map(tick_of).collect();

    assert_eq!(toggles.len(), 25);
    assert_eq!(strikes.len(), 100);
    assert_eq!(rig.out.ticks_of(OutputCall::LightToggle), toggles);
    assert_eq!(rig.out.ticks_of(OutputCall::BellOn), strikes);

    assert_eq!(rig.out.ticks_of(OutputCall::LightOff).first(), Some(&1029));
    assert!(!rig.out.light);
    assert!(!rig.out.bell);
    assert!(!rig.doorbell.is_playing());
}

#[test]
fn release_after_minimum_stops_immediately() {
    let mut rig = Rig::reference();
    press_and_release(&mut rig, 200, 50);

    assert!(rig.sink.events.contains(&DoorbellEvent::Released { held_ticks: 200 }));
    assert!(rig.sink.events.contains(&DoorbellEvent::StopHonored { played_ticks: 201 }));
    assert_eq!(rig.out.ticks_of(OutputCall::LightOff), vec![730]);
}

#[test]
fn long_hold_exhausts_the_budget() {
    let mut rig = Rig::reference();
    rig.fill_bucket();
    rig.hold(true, 600);

    assert_eq!(rig.doorbell.credit(), 0);
    assert!(!rig.doorbell.is_playing());
    // Countdown of 500 ran out while the button was still held.
    assert_eq!(rig.out.ticks_of(OutputCall::LightOff), vec![1029]);
    assert!(rig.sink.events.contains(&DoorbellEvent::PlaybackFinished { played_ticks: 500 }));
}

#[test]
fn press_with_spent_budget_stays_silent() {
    let mut rig = Rig::reference();
    rig.fill_bucket();
    rig.hold(true, 600);
    rig.out.clear();
    rig.sink.events.clear();

    // A glitch while held re-validates the press with no credit left.
    rig.hold(false, 1);
    rig.hold(true, 50);

    assert_eq!(rig.sink.events, vec![DoorbellEvent::Pressed { granted_ticks: 0 }]);
    assert!(rig.out.calls.is_empty());
    assert!(!rig.doorbell.is_playing());
}

#[test]
fn budget_refills_while_idle() {
    let mut rig = Rig::reference();
    rig.fill_bucket();
    rig.hold(true, 600);
    rig.hold(false, 300);
    rig.sink.events.clear();

    // Release latched at 1130; 291 ticks of refill, then 9 more before
    // the next press latches.
    rig.hold(true, 10);
    assert_eq!(rig.sink.events, vec![DoorbellEvent::Pressed { granted_ticks: 300 }]);
    assert!(rig.doorbell.is_playing());
}

#[test]
fn bouncing_contact_produces_no_output() {
    let mut rig = Rig::reference();
    rig.fill_bucket();

    for i in 0..50 {
        rig.step(i % 2 == 0);
    }
    assert!(rig.sink.events.is_empty());
    assert!(rig.out.calls.is_empty());
    assert_eq!(rig.doorbell.credit(), 500);

    rig.hold(true, 10);
    assert_eq!(rig.sink.events, vec![DoorbellEvent::Pressed { granted_ticks: 500 }]);
    assert_eq!(rig.now(), 580);
}

#[test]
fn renewed_press_restarts_from_remaining_credit() {
    let mut rig = Rig::reference();
    press_and_release(&mut rig, 30, 20);
    // Release latched at 560, still playing.
    assert!(rig.doorbell.is_playing());

    rig.hold(true, 10);
    let pressed: Vec<_> = rig
        .sink
        .events
        .iter()
        .filter(|e| matches!(e, DoorbellEvent::Pressed { .. }))
        .collect();
    assert_eq!(pressed.len(), 2);
    assert!(!rig.doorbell.playback().stop_requested);
    assert_eq!(rig.doorbell.playback().countup, 1);
}
