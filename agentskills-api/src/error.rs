#![doc = "Error types."]
use agentskills_rest::http::StatusCode;
use agentskills_rest::RestResponse;
use thiserror::Error;

/// Error type for this crate.
///
/// Variants built from a response display only the response's message, so
/// callers can show `err.to_string()` to the user as is.
#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be sent or no response was received.
    #[error(transparent)]
    Transport(#[from] agentskills_rest::Error),
    /// A `401` triggered a credential refresh, and the refresh was rejected.
    /// Stored credentials have been cleared.
    #[error("{detail}")]
    AuthenticationExpired { status: StatusCode, detail: String },
    /// A `401` occurred and no refresh token was available.
    #[error("{detail}")]
    AuthenticationUnavailable { status: StatusCode, detail: String },
    /// Any other non-2xx response.
    #[error("{detail}")]
    RequestRejected { status: StatusCode, detail: String },
    /// A successful response whose payload does not match the expected shape.
    #[error("unexpected response payload: {0}")]
    UnexpectedResponse(#[from] serde_json::Error),
    #[error("credential store error: {0}")]
    CredentialStore(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    pub(crate) fn rejected(response: &RestResponse) -> Self {
        Self::RequestRejected { status: response.status, detail: response.detail() }
    }
    pub(crate) fn unavailable(response: &RestResponse) -> Self {
        Self::AuthenticationUnavailable { status: response.status, detail: response.detail() }
    }
    pub(crate) fn expired(response: &RestResponse) -> Self {
        Self::AuthenticationExpired { status: response.status, detail: response.detail() }
    }
    /// The HTTP status of the response this error was built from, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::AuthenticationExpired { status, .. }
            | Self::AuthenticationUnavailable { status, .. }
            | Self::RequestRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Type alias to use this crate's [`Error`](enum@crate::Error) type in a [`Result`](core::result::Result).
pub type Result<T> = core::result::Result<T, Error>;
