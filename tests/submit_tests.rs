// Host-side tests for the contact form state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod submit {
        include!("../src/core/submit.rs");
    }
}

use fx::submit::*;

fn run(result: Result<(), SubmitError>) -> (Vec<String>, Vec<ButtonView>) {
    let mut m = SubmitMachine::new("Send");
    let mut labels = vec!["Send".to_string()];
    let mut views = Vec::new();

    let sending = m.begin().expect("idle machine accepts a submission");
    labels.push(sending.label.clone());
    views.push(sending);

    let done = m.complete(&result).expect("sending machine completes");
    labels.push(done.label.clone());
    views.push(done);

    let reset = m.reset().expect("terminal state resets");
    labels.push(reset.label.clone());
    views.push(reset);
    assert_eq!(m.state(), SubmitState::Idle);
    (labels, views)
}

#[test]
fn successful_submission_label_sequence() {
    let (labels, views) = run(Ok(()));
    assert_eq!(labels, vec!["Send", "Sending...", "Message Sent!", "Send"]);
    assert!(views[0].disabled);
    assert!(views[1].clear_form);
    assert!(views[1].reset_after_ms.unwrap() >= 3000);
    assert!(!views[2].disabled);
}

#[test]
fn failed_submission_label_sequence() {
    let (labels, views) = run(Err(SubmitError::Network("offline".into())));
    assert_eq!(labels, vec!["Send", "Sending...", "Failed. Try Again", "Send"]);
    assert!(!views[1].clear_form, "fields are kept for a retry");
    assert!(views[1].reset_after_ms.unwrap() >= 3000);
}

#[test]
fn http_errors_are_failures() {
    let (labels, _) = run(outcome_for_status(500));
    assert_eq!(labels[2], "Failed. Try Again");
    assert_eq!(outcome_for_status(200), Ok(()));
    assert_eq!(outcome_for_status(204), Ok(()));
    assert_eq!(
        outcome_for_status(422),
        Err(SubmitError::Http { status: 422 })
    );
    assert!(outcome_for_status(302).is_err());
}

#[test]
fn second_submission_is_rejected_while_busy() {
    let mut m = SubmitMachine::new("Send");
    m.begin().unwrap();
    assert_eq!(m.begin(), Err(SubmitError::Busy));
    m.complete(&Ok(())).unwrap();
    assert_eq!(m.state(), SubmitState::Succeeded);
    assert_eq!(m.begin(), Err(SubmitError::Busy), "still showing the result");
    m.reset().unwrap();
    assert!(m.begin().is_ok());
}

#[test]
fn out_of_order_transitions_are_ignored() {
    let mut m = SubmitMachine::new("Send");
    assert!(m.complete(&Ok(())).is_none());
    assert!(m.reset().is_none());
    m.begin().unwrap();
    assert!(m.reset().is_none());
    assert_eq!(m.state(), SubmitState::Sending);
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        SubmitError::Http { status: 503 }.to_string(),
        "form endpoint answered HTTP 503"
    );
    assert_eq!(
        SubmitError::Network("TypeError: Failed to fetch".into()).to_string(),
        "form request failed: TypeError: Failed to fetch"
    );
}
