use crate::reqwest::ReqwestClient;
use agentskills_rest::http::{Method, StatusCode};
use agentskills_rest::{Form, RestClient, RestRequest};
use mockito::{Matcher, Server};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize, Debug)]
struct Parameters {
    q: String,
}

#[derive(Serialize, Debug)]
struct Input {
    name: String,
}

#[tokio::test]
async fn send_query() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let mock_ok = server
        .mock("GET", "/api/v1/skills")
        .match_query(Matcher::UrlEncoded("q".into(), "demo".into()))
        .match_header("authorization", "Bearer access")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items": [], "total": 0}"#)
        .create_async()
        .await;
    let mock_err = server
        .mock("GET", "/api/v1/skills/missing")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Skill not found"}"#)
        .create_async()
        .await;
    let mock_server_error = server
        .mock("GET", "/api/v1/users/me")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = ReqwestClient::new(server.url());
    // Ok
    {
        let request = RestRequest::<_, ()>::new(Method::GET, "/api/v1/skills")
            .parameters(Parameters { q: "demo".into() });
        let response = client.send_rest(&request, Some("access")).await?;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.payload, json!({"items": [], "total": 0}));
        mock_ok.assert_async().await;
    }
    // Err (detail)
    {
        let request = RestRequest::<(), ()>::new(Method::GET, "/api/v1/skills/missing");
        let response = client.send_rest(&request, None).await?;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.detail(), "Skill not found");
        mock_err.assert_async().await;
    }
    // Err (server error, no JSON body)
    {
        let request = RestRequest::<(), ()>::new(Method::GET, "/api/v1/users/me");
        let response = client.send_rest(&request, None).await?;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.payload, json!({}));
        assert_eq!(response.detail(), "Internal Server Error");
        mock_server_error.assert_async().await;
    }
    Ok(())
}

#[tokio::test]
async fn send_procedure() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let mock_create = server
        .mock("POST", "/api/v1/skills")
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(r#"{"name": "demo"}"#.into()))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "s1", "name": "demo"}"#)
        .create_async()
        .await;
    let mock_delete = server.mock("DELETE", "/api/v1/skills/s1").with_status(204).create_async().await;

    let client = ReqwestClient::new(server.url());
    let request = RestRequest::<(), _>::new(Method::POST, "/api/v1/skills").json(Input { name: "demo".into() });
    let response = client.send_rest(&request, Some("access")).await?;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.payload, json!({"id": "s1", "name": "demo"}));
    mock_create.assert_async().await;

    let request = RestRequest::<(), ()>::new(Method::DELETE, "/api/v1/skills/s1");
    let response = client.send_rest(&request, Some("access")).await?;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(response.payload, json!({}));
    mock_delete.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn send_multipart() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let mock_upload = server
        .mock("POST", "/api/v1/skills/upload")
        .match_header("content-type", Matcher::Regex("^multipart/form-data; boundary=".into()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("name=\"skill_id\"\r\n\r\ns1\r\n".into()),
            Matcher::Regex("name=\"file\"; filename=\"SKILL.md\"\r\nContent-Type: text/markdown\r\n\r\n# Demo\r\n".into()),
        ]))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"filename": "SKILL.md"}"#)
        .create_async()
        .await;

    let client = ReqwestClient::new(server.url());
    let request = RestRequest::<(), ()>::new(Method::POST, "/api/v1/skills/upload").multipart(
        Form::new().text("skill_id", "s1").file("file", "SKILL.md", "text/markdown", b"# Demo".to_vec()),
    );
    let response = client.send_rest(&request, Some("access")).await?;
    assert_eq!(response.payload, json!({"filename": "SKILL.md"}));
    mock_upload.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // nothing listens on the discard port
    let client = ReqwestClient::new("http://127.0.0.1:9");
    let request = RestRequest::<(), ()>::new(Method::GET, "/api/v1/users/me");
    let err = client.send_rest(&request, None).await.expect_err("request should fail");
    assert!(matches!(err, agentskills_rest::Error::HttpClient(_)), "unexpected error: {err:?}");
}
