use crate::MinIntervalGate;

use std::time::Duration;

#[test]
fn given_fresh_gate_when_tried_then_first_pass_succeeds() {
    let gate = MinIntervalGate::new(Duration::from_secs(2));

    assert!(gate.try_pass());
}

#[test]
fn given_recent_pass_when_tried_again_then_blocked() {
    let gate = MinIntervalGate::new(Duration::from_secs(2));

    assert!(gate.try_pass());
    assert!(!gate.try_pass());
    assert!(!gate.try_pass());
}

#[test]
fn given_elapsed_interval_when_tried_then_passes_again() {
    let gate = MinIntervalGate::new(Duration::from_millis(20));

    assert!(gate.try_pass());
    std::thread::sleep(Duration::from_millis(30));
    assert!(gate.try_pass());
}

#[test]
fn given_reset_when_tried_then_passes_immediately() {
    let gate = MinIntervalGate::new(Duration::from_secs(2));

    assert!(gate.try_pass());
    gate.reset();
    assert!(gate.try_pass());
}
