#![doc = "Error types."]
use http::StatusCode;
use std::fmt::Debug;

/// Error body convention of the agentskills backend.
///
/// ```json
/// { "detail": "Skill not found" }
/// ```
///
/// Validation failures put a list into `detail`; those do not deserialize
/// into this type and fall back to the status text.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorResponseBody {
    pub detail: Option<String>,
}

impl ErrorResponseBody {
    /// Extract the body's human-readable message, if it carries a non-empty one.
    pub fn from_payload(payload: &serde_json::Value) -> Option<String> {
        serde_json::from_value::<Self>(payload.clone())
            .ok()
            .and_then(|body| body.detail)
            .filter(|detail| !detail.is_empty())
    }
}

/// The transport status text for a status code, e.g. `Unauthorized` for `401`.
pub fn status_text(status: StatusCode) -> String {
    status.canonical_reason().map_or_else(|| status.as_str().to_string(), String::from)
}

/// Failures that happen before a response is received.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("http request error: {0}")]
    HttpRequest(#[from] http::Error),
    #[error("http client error: {0}")]
    HttpClient(Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("serde_html_form error: {0}")]
    SerdeHtmlForm(#[from] serde_html_form::ser::Error),
}
