#![doc = "JSON-over-HTTP request layer for the agentskills API."]
pub mod error;
mod traits;
pub mod types;

pub use crate::error::{Error, ErrorResponseBody};
pub use crate::traits::{HttpClient, RestClient};
pub use crate::types::{Form, FormField, HttpBody, RequestBody, RestRequest, RestResponse};
pub use http;

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderValue, Method, Request, Response, StatusCode};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    struct DummyClient {
        status: StatusCode,
        body: Vec<u8>,
        requests: Arc<Mutex<Vec<Request<HttpBody>>>>,
    }

    impl DummyClient {
        fn new(status: StatusCode, body: &str) -> Self {
            Self { status, body: body.as_bytes().to_vec(), requests: Default::default() }
        }
        fn last_request(&self) -> Request<HttpBody> {
            self.requests.lock().expect("lock").pop().expect("a request was sent")
        }
    }

    impl HttpClient for DummyClient {
        async fn send_http(
            &self,
            request: Request<HttpBody>,
        ) -> Result<Response<Vec<u8>>, Box<dyn std::error::Error + Send + Sync + 'static>> {
            self.requests.lock().expect("lock").push(request);
            Ok(Response::builder().status(self.status).body(self.body.clone())?)
        }
    }

    impl RestClient for DummyClient {
        fn base_uri(&self) -> String {
            "https://example.com/".into()
        }
    }

    #[derive(serde::Serialize)]
    struct Query {
        #[serde(skip_serializing_if = "Option::is_none")]
        q: Option<String>,
    }

    #[tokio::test]
    async fn response_ok() {
        let client = DummyClient::new(StatusCode::OK, r#"{"id":"s1"}"#);
        let response = client
            .send_rest(&RestRequest::<(), ()>::new(Method::GET, "/api/v1/skills/s1"), Some("access"))
            .await
            .expect("must be ok");
        assert_eq!(response, RestResponse { status: StatusCode::OK, payload: json!({"id": "s1"}) });
        let request = client.last_request();
        assert_eq!(request.uri(), "https://example.com/api/v1/skills/s1");
        assert_eq!(request.headers().get("authorization"), Some(&HeaderValue::from_static("Bearer access")));
        assert_eq!(
            request.headers().get("content-type"),
            Some(&HeaderValue::from_static("application/json"))
        );
    }

    #[tokio::test]
    async fn no_content_skips_parsing() {
        let client = DummyClient::new(StatusCode::NO_CONTENT, "garbage");
        let response = client
            .send_rest(&RestRequest::<(), ()>::new(Method::DELETE, "/api/v1/tokens/t1"), None)
            .await
            .expect("must be ok");
        assert_eq!(response.payload, json!({}));
        assert!(client.last_request().headers().get("authorization").is_none());
    }

    #[tokio::test]
    async fn malformed_body_is_empty_object() {
        let client = DummyClient::new(StatusCode::OK, "<html>not json</html>");
        let response = client
            .send_rest(&RestRequest::<(), ()>::new(Method::GET, "/api/v1/users/me"), Some(""))
            .await
            .expect("must be ok");
        assert!(response.is_success());
        assert_eq!(response.payload, json!({}));
        // an empty bearer token means no authorization header
        assert!(client.last_request().headers().get("authorization").is_none());
    }

    #[tokio::test]
    async fn error_detail() {
        let client = DummyClient::new(StatusCode::NOT_FOUND, r#"{"detail":"Skill not found"}"#);
        let response = client
            .send_rest(&RestRequest::<(), ()>::new(Method::GET, "/api/v1/skills/x"), None)
            .await
            .expect("response should be received");
        assert!(!response.is_success());
        assert_eq!(response.detail(), "Skill not found");

        let client = DummyClient::new(StatusCode::INTERNAL_SERVER_ERROR, "oops");
        let response = client
            .send_rest(&RestRequest::<(), ()>::new(Method::GET, "/api/v1/skills/x"), None)
            .await
            .expect("response should be received");
        assert_eq!(response.detail(), "Internal Server Error");
    }

    #[tokio::test]
    async fn query_and_json_body() {
        let client = DummyClient::new(StatusCode::OK, "{}");
        let request = RestRequest::new(Method::POST, "/api/v1/skills")
            .parameters(Query { q: Some(String::from("a b")) })
            .json(json!({"name": "demo"}));
        client.send_rest(&request, None).await.expect("must be ok");
        let sent = client.last_request();
        assert_eq!(sent.uri(), "https://example.com/api/v1/skills?q=a+b");
        let body = sent.body().as_bytes().expect("json body");
        assert_eq!(serde_json::from_slice::<serde_json::Value>(body).expect("json"), json!({"name": "demo"}));

        let request = RestRequest::<_, ()>::new(Method::GET, "/api/v1/skills").parameters(Query { q: None });
        client.send_rest(&request, None).await.expect("must be ok");
        assert_eq!(client.last_request().uri(), "https://example.com/api/v1/skills");
    }

    #[tokio::test]
    async fn caller_headers_do_not_override_content_type() {
        let client = DummyClient::new(StatusCode::OK, "{}");
        let mut request = RestRequest::<(), ()>::new(Method::GET, "/api/v1/tokens");
        request.headers.insert("content-type", HeaderValue::from_static("text/plain"));
        request.headers.insert("x-request-id", HeaderValue::from_static("42"));
        client.send_rest(&request, None).await.expect("must be ok");
        let sent = client.last_request();
        assert_eq!(sent.headers().get("content-type"), Some(&HeaderValue::from_static("application/json")));
        assert_eq!(sent.headers().get("x-request-id"), Some(&HeaderValue::from_static("42")));
    }

    #[tokio::test]
    async fn multipart_body_is_left_to_the_backend() {
        let client = DummyClient::new(StatusCode::CREATED, r#"{"filename":"SKILL.md"}"#);
        let form = Form::new().text("skill_id", "s1").file("file", "SKILL.md", "text/markdown", b"body".to_vec());
        let mut request = RestRequest::<(), ()>::new(Method::POST, "/api/v1/skills/upload").multipart(form.clone());
        request.headers.insert("content-type", HeaderValue::from_static("application/json"));
        let response = client.send_rest(&request, Some("access")).await.expect("must be ok");
        assert_eq!(response.payload, json!({"filename": "SKILL.md"}));
        let sent = client.last_request();
        assert!(sent.headers().get("content-type").is_none());
        assert_eq!(sent.headers().get("authorization"), Some(&HeaderValue::from_static("Bearer access")));
        assert_eq!(sent.body(), &HttpBody::Multipart(form));
        assert_eq!(sent.body().as_bytes(), None);
    }
}
