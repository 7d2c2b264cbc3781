//! Waitlist registration: email check, backend client and the submit flow.

mod client;
mod email;
mod flow;

pub use client::{
    GENERIC_FAILURE, HttpWaitlistClient, JoinRequest, WaitlistClient, WaitlistError,
    error_message_from_body,
};
pub use email::{EmailError, is_email_shaped, validate_email};
pub use flow::{JOINED_MESSAGE, SubmissionFlow, SubmissionStore, SubmitOutcome};
