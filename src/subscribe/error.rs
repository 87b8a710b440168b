use std::time::Duration;

use crate::konst::CONNECT_FAILED_MESSAGE;
use crate::konst::EMPTY_EMAIL_MESSAGE;
use crate::konst::REJECTED_FALLBACK_MESSAGE;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("No email address entered")]
    Validation,

    #[error("Subscription endpoint rejected the request with status {status}")]
    Rejected {
        status: reqwest::StatusCode,
        message: Option<String>,
    },

    #[error("Failed to reach subscription endpoint")]
    Transport(#[source] reqwest::Error),

    #[error("Subscription request did not complete within {:?}", .0)]
    Timeout(Duration),

    #[error("Subscription request was cancelled")]
    Cancelled,
}

impl SubmitError {
    /// Text for the page's message area.
    pub fn user_message(&self) -> &str {
        match self {
            SubmitError::Validation => EMPTY_EMAIL_MESSAGE,
            SubmitError::Rejected {
                message: Some(message),
                ..
            } => message,
            SubmitError::Rejected { message: None, .. } => REJECTED_FALLBACK_MESSAGE,
            SubmitError::Transport(_) | SubmitError::Timeout(_) | SubmitError::Cancelled => {
                CONNECT_FAILED_MESSAGE
            }
        }
    }
}
