use crate::error::{status_text, ErrorResponseBody};
use http::header::{HeaderName, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, Method, StatusCode};
use serde::Serialize;

pub(crate) const APPLICATION_JSON: &str = "application/json";

/// HTTP headers which are set by the request layer.
pub enum Header {
    ContentType,
    Authorization,
}

impl From<Header> for HeaderName {
    fn from(value: Header) -> Self {
        match value {
            Header::ContentType => CONTENT_TYPE,
            Header::Authorization => AUTHORIZATION,
        }
    }
}

/// A request which can be executed with [`RestClient::send_rest()`](crate::RestClient::send_rest).
///
/// Requests are borrowed while sending, so the same request can be dispatched
/// again after a credential refresh.
pub struct RestRequest<P, I>
where
    I: Serialize,
{
    pub method: Method,
    pub path: String,
    pub parameters: Option<P>,
    pub body: Option<RequestBody<I>>,
    pub headers: HeaderMap,
}

impl<P, I> RestRequest<P, I>
where
    I: Serialize,
{
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            parameters: None,
            body: None,
            headers: HeaderMap::new(),
        }
    }
    pub fn parameters(mut self, parameters: P) -> Self {
        self.parameters = Some(parameters);
        self
    }
    pub fn json(mut self, input: I) -> Self {
        self.body = Some(RequestBody::Json(input));
        self
    }
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }
}

/// The body of a [`RestRequest`].
///
/// JSON serializable data, or a multipart form for file uploads.
pub enum RequestBody<T>
where
    T: Serialize,
{
    Json(T),
    Multipart(Form),
}

/// A received response whose body has been leniently parsed as JSON.
///
/// `204 No Content` and bodies which are not valid JSON both become an empty
/// JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct RestResponse {
    pub status: StatusCode,
    pub payload: serde_json::Value,
}

impl RestResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
    /// The message to surface for a failed response: the body's `detail`,
    /// else the status text.
    pub fn detail(&self) -> String {
        ErrorResponseBody::from_payload(&self.payload).unwrap_or_else(|| status_text(self.status))
    }
}

/// A `multipart/form-data` body.
///
/// Only the fields are described here; the [`HttpClient`](crate::HttpClient)
/// backend encodes them and sets the `Content-Type` with its boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Text { name: String, value: String },
    File { name: String, file_name: String, mime_type: String, data: Vec<u8> },
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FormField::Text { name: name.into(), value: value.into() });
        self
    }
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        self.fields.push(FormField::File {
            name: name.into(),
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data: data.into(),
        });
        self
    }
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
    pub fn into_fields(self) -> Vec<FormField> {
        self.fields
    }
}

/// The body handed to an [`HttpClient`](crate::HttpClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpBody {
    Bytes(Vec<u8>),
    Multipart(Form),
}

impl HttpBody {
    /// The raw bytes, if this is not a multipart body.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            Self::Multipart(_) => None,
        }
    }
}
