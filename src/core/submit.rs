use super::constants::{LABEL_FAILED, LABEL_SENDING, LABEL_SENT, SUBMIT_RESET_MS};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form endpoint answered HTTP {status}")]
    Http { status: u16 },
    #[error("form request failed: {0}")]
    Network(String),
    #[error("a submission is already in progress")]
    Busy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Sending,
    Succeeded,
    Failed,
}

/// What the button should show after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub disabled: bool,
    /// Milliseconds until `reset` should be called, for terminal states.
    pub reset_after_ms: Option<u32>,
    /// Clear the form fields.
    pub clear_form: bool,
}

/// Contact form submit button state machine.
#[derive(Clone, Debug)]
pub struct SubmitMachine {
    state: SubmitState,
    original_label: String,
}

impl SubmitMachine {
    pub fn new(original_label: impl Into<String>) -> Self {
        Self {
            state: SubmitState::Idle,
            original_label: original_label.into(),
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Idle -> Sending. Any other state rejects the new submission.
    pub fn begin(&mut self) -> Result<ButtonView, SubmitError> {
        if self.state != SubmitState::Idle {
            return Err(SubmitError::Busy);
        }
        self.state = SubmitState::Sending;
        Ok(ButtonView {
            label: LABEL_SENDING.to_string(),
            disabled: true,
            reset_after_ms: None,
            clear_form: false,
        })
    }

    /// Sending -> Succeeded | Failed. Returns None outside of Sending.
    pub fn complete(&mut self, result: &Result<(), SubmitError>) -> Option<ButtonView> {
        if self.state != SubmitState::Sending {
            return None;
        }
        let (state, label, clear_form) = match result {
            Ok(()) => (SubmitState::Succeeded, LABEL_SENT, true),
            Err(_) => (SubmitState::Failed, LABEL_FAILED, false),
        };
        self.state = state;
        Some(ButtonView {
            label: label.to_string(),
            disabled: true,
            reset_after_ms: Some(SUBMIT_RESET_MS),
            clear_form,
        })
    }

    /// Succeeded | Failed -> Idle, restoring the original label.
    pub fn reset(&mut self) -> Option<ButtonView> {
        match self.state {
            SubmitState::Succeeded | SubmitState::Failed => {
                self.state = SubmitState::Idle;
                Some(ButtonView {
                    label: self.original_label.clone(),
                    disabled: false,
                    reset_after_ms: None,
                    clear_form: false,
                })
            }
            _ => None,
        }
    }
}

/// Map an HTTP status to the submission outcome; only 2xx counts as sent.
pub fn outcome_for_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Http { status })
    }
}
