#![doc = "HttpClient and RestClient implementations for [reqwest]."]
use agentskills_rest::{Form, FormField, HttpBody, HttpClient, RestClient};
use http::{Request, Response};
use reqwest::{multipart, Client};
use std::sync::Arc;

/// A [`RestClient`] sending requests to one agentskills server.
///
/// Clones share the underlying connection pool.
#[derive(Clone)]
pub struct ReqwestClient {
    base_uri: String,
    client: Arc<Client>,
}

impl ReqwestClient {
    pub fn new(base_uri: impl AsRef<str>) -> Self {
        ReqwestClientBuilder::new(base_uri).build()
    }
}

pub struct ReqwestClientBuilder {
    base_uri: String,
    client: Option<Client>,
}

impl ReqwestClientBuilder {
    pub fn new(base_uri: impl AsRef<str>) -> Self {
        Self { base_uri: base_uri.as_ref().into(), client: None }
    }
    /// Use a preconfigured [`Client`], e.g. with timeouts or a proxy.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }
    pub fn build(self) -> ReqwestClient {
        ReqwestClient {
            base_uri: self.base_uri.trim_end_matches('/').into(),
            client: Arc::new(self.client.unwrap_or_default()),
        }
    }
}

// reqwest picks the boundary and sets the multipart `Content-Type`.
fn multipart_form(form: Form) -> reqwest::Result<multipart::Form> {
    form.into_fields().into_iter().try_fold(multipart::Form::new(), |encoded, field| match field {
        FormField::Text { name, value } => Ok(encoded.text(name, value)),
        FormField::File { name, file_name, mime_type, data } => {
            let part = multipart::Part::bytes(data).file_name(file_name).mime_str(&mime_type)?;
            Ok(encoded.part(name, part))
        }
    })
}

impl HttpClient for ReqwestClient {
    async fn send_http(
        &self,
        request: Request<HttpBody>,
    ) -> Result<Response<Vec<u8>>, Box<dyn std::error::Error + Send + Sync + 'static>> {
        let (parts, body) = request.into_parts();
        let builder = self.client.request(parts.method, parts.uri.to_string()).headers(parts.headers);
        let builder = match body {
            HttpBody::Bytes(bytes) => builder.body(bytes),
            HttpBody::Multipart(form) => builder.multipart(multipart_form(form)?),
        };
        let response = builder.send().await?;
        let mut received = Response::builder().status(response.status());
        for (name, value) in response.headers() {
            received = received.header(name, value);
        }
        received.body(response.bytes().await?.to_vec()).map_err(Into::into)
    }
}

impl RestClient for ReqwestClient {
    fn base_uri(&self) -> String {
        self.base_uri.clone()
    }
}
