use crate::error::Error;
use crate::types::{Header, HttpBody, RequestBody, RestRequest, RestResponse, APPLICATION_JSON};
use http::header::{HeaderName, HeaderValue};
use http::{Request, StatusCode};
use serde::Serialize;
use std::future::Future;

/// An abstract HTTP client.
#[cfg_attr(not(target_arch = "wasm32"), trait_variant::make(Send))]
pub trait HttpClient {
    /// Send an HTTP request and return the response.
    ///
    /// A [`HttpBody::Multipart`] body is encoded by the implementation, which
    /// also sets its `Content-Type`.
    fn send_http(
        &self,
        request: Request<HttpBody>,
    ) -> impl Future<
        Output = core::result::Result<
            http::Response<Vec<u8>>,
            Box<dyn std::error::Error + Send + Sync + 'static>,
        >,
    >;
}

type RestResult = core::result::Result<RestResponse, Error>;

/// An abstract client for the agentskills JSON API.
///
/// [`send_rest()`](RestClient::send_rest) method has a default implementation,
/// which wraps the [`HttpClient::send_http()`] method to handle input and output as JSON.
#[cfg_attr(not(target_arch = "wasm32"), trait_variant::make(Send))]
pub trait RestClient: HttpClient {
    /// The base URI of the API server.
    fn base_uri(&self) -> String;
    /// Send a request, with `bearer` as the `Authorization` token if present,
    /// and return the response whatever its status.
    #[cfg(not(target_arch = "wasm32"))]
    fn send_rest<P, I>(
        &self,
        request: &RestRequest<P, I>,
        bearer: Option<&str>,
    ) -> impl Future<Output = RestResult>
    where
        P: Serialize + Send + Sync,
        I: Serialize + Send + Sync,
        // `Self` has to be `Sync` for `Future` to be `Send`.
        Self: Sync,
    {
        send_rest(self, request, bearer)
    }
    #[cfg(target_arch = "wasm32")]
    fn send_rest<P, I>(
        &self,
        request: &RestRequest<P, I>,
        bearer: Option<&str>,
    ) -> impl Future<Output = RestResult>
    where
        P: Serialize + Send + Sync,
        I: Serialize + Send + Sync,
    {
        send_rest(self, request, bearer)
    }
}

#[inline(always)]
async fn send_rest<P, I, C: RestClient + ?Sized>(
    client: &C,
    request: &RestRequest<P, I>,
    bearer: Option<&str>,
) -> RestResult
where
    P: Serialize + Send + Sync,
    I: Serialize + Send + Sync,
{
    let mut uri = format!("{}{}", client.base_uri().trim_end_matches('/'), request.path);
    // Query parameters
    if let Some(p) = &request.parameters {
        let qs = serde_html_form::to_string(p)?;
        if !qs.is_empty() {
            uri += if uri.contains('?') { "&" } else { "?" };
            uri += &qs;
        }
    }
    // Body
    let (content_type, body) = match &request.body {
        Some(RequestBody::Json(data)) => (Some(APPLICATION_JSON), HttpBody::Bytes(serde_json::to_vec(data)?)),
        Some(RequestBody::Multipart(form)) => (None, HttpBody::Multipart(form.clone())),
        None => (Some(APPLICATION_JSON), HttpBody::Bytes(Vec::new())),
    };
    let mut http_request = Request::builder().method(&request.method).uri(&uri).body(body)?;
    // Headers
    let headers = http_request.headers_mut();
    headers.extend(request.headers.clone());
    match content_type {
        Some(content_type) => {
            headers.insert(HeaderName::from(Header::ContentType), HeaderValue::from_static(content_type));
        }
        None => {
            headers.remove(HeaderName::from(Header::ContentType));
        }
    }
    if let Some(token) = bearer.filter(|token| !token.is_empty()) {
        headers.insert(
            HeaderName::from(Header::Authorization),
            HeaderValue::from_str(&format!("Bearer {token}")).map_err(http::Error::from)?,
        );
    }
    // Send
    let (parts, body) =
        client.send_http(http_request).await.map_err(Error::HttpClient)?.into_parts();
    let payload = if parts.status == StatusCode::NO_CONTENT {
        serde_json::Value::Object(Default::default())
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| serde_json::Value::Object(Default::default()))
    };
    Ok(RestResponse { status: parts.status, payload })
}
