//! Waitlist HTTP client abstraction.
//!
//! The flow only depends on the [`WaitlistClient`] trait; the browser build
//! plugs in [`HttpWaitlistClient`] (gloo-net), tests plug in fakes.

use serde::{Deserialize, Serialize};

/// Message shown when the backend gives no usable reason
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Body of `POST /waitlist`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub email: String,
}

impl JoinRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Error body the backend may send with a non-2xx status
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Waitlist request error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WaitlistError {
    /// The backend answered with a non-2xx status
    #[error("Waitlist request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// The request body could not be built
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl WaitlistError {
    /// Text to show the user: the backend's message unless it is missing or empty.
    pub fn user_message(&self) -> String {
        match self {
            WaitlistError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

/// Pull `message` out of an error response body, if there is one.
pub fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
}

/// Something that can register an email with the waitlist backend
#[allow(async_fn_in_trait)]
pub trait WaitlistClient {
    async fn join(&self, request: &JoinRequest) -> Result<(), WaitlistError>;
}

/// gloo-net backed client used by the hydrated page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpWaitlistClient {
    endpoint: String,
}

impl HttpWaitlistClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl WaitlistClient for HttpWaitlistClient {
    #[cfg(not(feature = "ssr"))]
    async fn join(&self, request: &JoinRequest) -> Result<(), WaitlistError> {
        use gloo_net::http::Request;

        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| WaitlistError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| WaitlistError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| error_message_from_body(&body));

        Err(WaitlistError::Rejected {
            status: response.status(),
            message,
        })
    }

    #[cfg(feature = "ssr")]
    async fn join(&self, _request: &JoinRequest) -> Result<(), WaitlistError> {
        Err(WaitlistError::Network(format!(
            "Requests to {} are only sent from the browser",
            self.endpoint
        )))
    }
}
