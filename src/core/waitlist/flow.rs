//! Waitlist submission flow.
//!
//! `Idle → Validating → Idle` on a validation failure, otherwise
//! `Submitting → Idle` with the email cleared on success or kept on failure.
//! The busy flag is the only guard against overlapping submissions.

use super::client::{JoinRequest, WaitlistClient};
use super::email::{EmailError, validate_email};
use crate::core::notify::Notifier;

/// Toast text after a successful registration
pub const JOINED_MESSAGE: &str = "You've been added to the waitlist!";

/// Where the flow keeps the email field and the busy flag
pub trait SubmissionStore {
    fn email(&self) -> String;
    fn set_email(&self, email: String);
    fn is_submitting(&self) -> bool;
    fn set_submitting(&self, submitting: bool);

    /// False once the owning view has been torn down
    fn is_attached(&self) -> bool {
        true
    }
}

/// What a call to [`SubmissionFlow::submit`] ended with
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing happened
    Busy,
    /// Rejected locally, no request sent
    Invalid(EmailError),
    /// The backend accepted the email
    Joined,
    /// The request failed; carries the message shown to the user
    Failed(String),
    /// The view went away while the request was in flight
    Detached,
}

/// Validate → POST → toast → reset
#[derive(Clone)]
pub struct SubmissionFlow<S, C, N> {
    store: S,
    client: C,
    notifier: N,
}

impl<S, C, N> SubmissionFlow<S, C, N>
where
    S: SubmissionStore,
    C: WaitlistClient,
    N: Notifier,
{
    pub fn new(store: S, client: C, notifier: N) -> Self {
        Self {
            store,
            client,
            notifier,
        }
    }

    /// Replace the held email. No validation happens here.
    pub fn set_email(&self, value: impl Into<String>) {
        self.store.set_email(value.into());
    }

    pub async fn submit(&self) -> SubmitOutcome {
        if self.store.is_submitting() {
            return SubmitOutcome::Busy;
        }

        let email = self.store.email();
        if let Err(e) = validate_email(&email) {
            self.notifier.error(e.to_string());
            return SubmitOutcome::Invalid(e);
        }

        self.store.set_submitting(true);
        let result = self.client.join(&JoinRequest::new(email)).await;
        self.store.set_submitting(false);

        if !self.store.is_attached() {
            return SubmitOutcome::Detached;
        }

        match result {
            Ok(()) => {
                self.notifier.success(JOINED_MESSAGE);
                self.store.set_email(String::new());
                SubmitOutcome::Joined
            }
            Err(e) => {
                leptos::logging::warn!("Waitlist submission failed: {}", e);
                let message = e.user_message();
                self.notifier.error(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}
