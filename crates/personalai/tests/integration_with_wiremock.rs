//! Integration tests for the Personal.AI client using wiremock
//!
//! Every mock matches on the authentication and content-type headers, so a
//! passing happy-path test also proves the header contract. Exact-body
//! matchers prove payload presence/absence down to the field.

mod common;

use personalai::{Client, CreateMemoryRequest, Error};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(mock_server: &MockServer) -> Client {
    Client::builder()
        .api_key(common::test_api_key())
        .base_url(mock_server.uri())
        .build()
        .expect("Failed to build client")
}

#[tokio::test]
async fn test_create_memory_sends_exactly_the_required_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/memory"))
        .and(header("x-api-key", common::test_api_key().as_str()))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "Text": "My first memory with Personal.AI!",
            "SourceName": "Notes"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "created"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let request = CreateMemoryRequest::builder()
        .text("My first memory with Personal.AI!")
        .source_name("Notes")
        .build()
        .expect("Failed to build request");

    let response = client
        .memories()
        .create(request)
        .await
        .expect("Request failed");

    assert_eq!(response, Some(json!({"status": "created"})));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_create_memory_includes_optional_fields_when_supplied() {
    let mock_server = MockServer::start().await;

    // DeviceName is a supplied empty string and must still be on the wire
    Mock::given(method("POST"))
        .and(path("/memory"))
        .and(body_json(json!({
            "Text": "memory",
            "SourceName": "Notes",
            "CreatedTime": "Wed, 28 Jul 2021 13:30:00 PDT",
            "DeviceName": "",
            "RawFeed": "<p>memory</p>"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "created"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let request = CreateMemoryRequest::builder()
        .text("memory")
        .source_name("Notes")
        .created_time("Wed, 28 Jul 2021 13:30:00 PDT")
        .device_name("")
        .raw_feed("<p>memory</p>")
        .build()
        .expect("Failed to build request");

    let response = client
        .memories()
        .create(request)
        .await
        .expect("Request failed");

    assert!(response.is_some());

    mock_server.verify().await;
}

#[tokio::test]
async fn test_create_memory_rejects_empty_text_locally() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let request = CreateMemoryRequest::new("", "Notes");
    let result = client.memories().create(request).await;

    assert!(matches!(result, Err(Error::InvalidRequest(_))));

    // Nothing reached the server
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ai_message_posts_text_and_passes_response_through() {
    let mock_server = MockServer::start().await;

    let reply = json!({
        "ai_message": "Kubernetes is a container orchestration platform.",
        "ai_score": 0.92
    });

    Mock::given(method("POST"))
        .and(path("/message"))
        .and(header("x-api-key", common::test_api_key().as_str()))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"Text": "what is k8s?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let response = client
        .messages()
        .create("what is k8s?")
        .await
        .expect("Request failed");

    assert_eq!(response, Some(reply));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_upload_uri_posts_url_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(header("x-api-key", common::test_api_key().as_str()))
        .and(body_json(json!({"Url": "https://example.com/a"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "queued"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let response = client
        .uploads()
        .create("https://example.com/a")
        .await
        .expect("Request failed");

    assert_eq!(response, Some(json!({"status": "queued"})));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_validate_key_gets_with_no_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api-key/validate"))
        .and(header("x-api-key", common::test_api_key().as_str()))
        .and(header("content-type", "application/json"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"valid": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let response = client.api_keys().validate().await.expect("Request failed");

    assert_eq!(response, Some(json!({"valid": true})));

    mock_server.verify().await;
}

#[rstest]
#[case::bad_request(400)]
#[case::unauthorized(401)]
#[case::not_found(404)]
#[case::rate_limited(429)]
#[case::server_error(500)]
#[tokio::test]
async fn test_error_status_yields_absent_result(#[case] status: u16) {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/message"))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(json!({"message": "request rejected"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let response = client
        .messages()
        .create("hello")
        .await
        .expect("Status errors must not surface as faults");

    assert_eq!(response, None);
}

#[tokio::test]
async fn test_every_operation_reports_absence_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let memory = client
        .memories()
        .create(CreateMemoryRequest::new("memory", "Notes"))
        .await
        .unwrap();
    assert_eq!(memory, None);

    let message = client.messages().create("hello").await.unwrap();
    assert_eq!(message, None);

    let upload = client.uploads().create("https://example.com/a").await.unwrap();
    assert_eq!(upload, None);

    let validity = client.api_keys().validate().await.unwrap();
    assert_eq!(validity, None);
}

#[tokio::test]
async fn test_connection_error_propagates_as_fault() {
    // Port 0 is never connectable, so the transport fails before any HTTP
    // exchange takes place.
    let client = Client::builder()
        .api_key(common::test_api_key())
        .base_url("http://127.0.0.1:0")
        .build()
        .expect("Failed to build client");

    let result = client.messages().create("hello").await;

    assert!(matches!(result, Err(Error::Connection(_))));
}

#[tokio::test]
async fn test_malformed_success_body_propagates_as_fault() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/message"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let result = client.messages().create("hello").await;

    assert!(matches!(result, Err(Error::Serialization(_))));
}

#[tokio::test]
async fn test_array_response_passes_through() {
    let mock_server = MockServer::start().await;

    let reply = json!([{"id": 1}, {"id": 2}]);

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply.clone()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let response = client
        .uploads()
        .create("https://example.com/feed.xml")
        .await
        .expect("Request failed");

    assert_eq!(response, Some(reply));
}
