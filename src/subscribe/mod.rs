//! Newsletter subscription form.
//!
//! `Idle -> Validating -> (Invalid | Submitting) -> (Success | Failure) -> Idle`
//!
//! After a success the form keeps its disabled "subscribed" button for the rest of the page's
//! lifetime. A failure re-enables the button so the form can be submitted again right away.

use tokio_util::sync::CancellationToken;

use crate::konst::SUBMITTING_LABEL;
use crate::konst::SUBMIT_LABEL;
use crate::konst::SUBSCRIBED_LABEL;
use crate::konst::SUBSCRIBED_MESSAGE;
use crate::page::Page;
use crate::page::Tone;

mod client;
mod error;

pub use self::client::HttpSubscriptionClient;
pub use self::error::SubmitError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionAttempt {
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Subscribed,
}

pub struct SubscriptionForm {
    state: FormState,
}

impl Default for SubscriptionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriptionForm {
    pub fn new() -> Self {
        Self {
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Validates the raw input value and, if it is usable, switches the page into the
    /// submitting state.
    ///
    /// Returns `Ok(None)` when the submit button is currently disabled.
    pub fn submit(
        &mut self,
        page: &mut dyn Page,
        raw_email: &str,
    ) -> Result<Option<SubscriptionAttempt>, SubmitError> {
        if self.state != FormState::Idle {
            tracing::debug!(state = ?self.state, "Submit button disabled, ignoring submission");
            return Ok(None);
        }

        page.set_message("", None);

        let email = raw_email.trim();
        if email.is_empty() {
            let error = SubmitError::Validation;
            page.set_message(error.user_message(), Some(Tone::Error));
            return Err(error);
        }

        page.set_submit_button(false, SUBMITTING_LABEL);
        self.state = FormState::Submitting;

        Ok(Some(SubscriptionAttempt {
            email: email.to_string(),
        }))
    }

    /// Renders the settled request.
    pub fn finish(&mut self, page: &mut dyn Page, outcome: &Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                page.set_message(SUBSCRIBED_MESSAGE, Some(Tone::Success));
                page.reset_form();
                page.set_submit_button(false, SUBSCRIBED_LABEL);
                self.state = FormState::Subscribed;
            }

            Err(error) => {
                match error {
                    SubmitError::Transport(_) | SubmitError::Timeout(_) => {
                        tracing::error!(?error, "Subscription request failed");
                    }
                    _ => tracing::warn!(%error, "Subscription failed"),
                }

                page.set_message(error.user_message(), Some(Tone::Error));
                page.set_submit_button(true, SUBMIT_LABEL);
                self.state = FormState::Idle;
            }
        }
    }

    /// Full round trip for one submission: validate, send, render.
    pub async fn handle_submit(
        &mut self,
        page: &mut dyn Page,
        client: &HttpSubscriptionClient,
        raw_email: &str,
        cancellation_token: &CancellationToken,
    ) -> Result<(), SubmitError> {
        let Some(attempt) = self.submit(page, raw_email)? else {
            return Ok(());
        };

        let outcome = client.subscribe(&attempt, cancellation_token).await;
        self.finish(page, &outcome);
        outcome
    }
}
