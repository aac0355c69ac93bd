//! # Harness Error Tests

use tanhsim_core::HarnessError;

#[test]
fn liveness_display_reports_cycles() {
    let err = HarnessError::LivenessViolation {
        cycles: 1234,
        issued: 5,
        received: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains("1234"));
    assert!(msg.contains("5 issued"));
    assert!(msg.contains("3 received"));
}

#[test]
fn protocol_display_reports_cycle() {
    let err = HarnessError::ProtocolViolation {
        cycle: 42,
        issued: 0,
        received: 0,
    };
    assert!(err.to_string().contains("cycle 42"));
}

#[test]
fn resource_display_reports_request() {
    let err = HarnessError::ResourceExhausted { requested: 1_000_000 };
    assert!(err.to_string().contains("1000000"));
}

#[test]
fn errors_are_std_errors() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&HarnessError::Config("bad".into()));
}
