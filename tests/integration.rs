// End-to-end tests through the real reqwest client against a local mock server
#![allow(clippy::unwrap_used)]

use breakdown_lambda::config::Config;
use breakdown_lambda::handler::handle;
use breakdown_lambda::http::ReqwestClient;
use breakdown_lambda::models::ProxyEvent;
use breakdown_lambda::prompts::{METHOD_SYSTEM_INSTRUCTION, TOPIC_SYSTEM_INSTRUCTION};
use mockito::Matcher;
use serde_json::{Value, json};

const GENERATE_PATH: &str = r"^/v1beta/models/gemini-2\.5-flash:generateContent";

fn client() -> ReqwestClient {
    ReqwestClient::new(reqwest::Client::new())
}

fn post(body: &Value) -> ProxyEvent {
    ProxyEvent::new("POST", Some(&body.to_string()))
}

#[tokio::test]
async fn test_topic_breakdown_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("POST", Matcher::Regex(GENERATE_PATH.to_string()))
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "system_instruction": {"parts": [{"text": TOPIC_SYSTEM_INSTRUCTION}]},
            "contents": [{"parts": [{"text": "פרק את הנושא הבא/ה לרכיבים: גבולות"}]}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{
                    "content": {"parts": [{"text": "1. כבוד\n2. אמון\n3. הסכמה"}], "role": "model"},
                    "finishReason": "STOP"
                }]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let config = Config::new(Some("test-key".to_string())).with_api_base(server.url());
    let event = post(&json!({"type": "topic", "query": "גבולות"}));
    let response = handle(&event, &config, &client()).await;

    upstream.assert_async().await;
    assert_eq!(response.status_code, 200);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body, json!({"result": "1. כבוד\n2. אמון\n3. הסכמה"}));
}

#[tokio::test]
async fn test_method_breakdown_uses_configured_model() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("POST", Matcher::Regex(r"^/v1beta/models/gemini-test:generateContent".to_string()))
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(json!({
            "system_instruction": {"parts": [{"text": METHOD_SYSTEM_INSTRUCTION}]}
        })))
        .with_status(200)
        .with_body(json!({"candidates": [{"content": {"parts": [{"text": "1. לוח"}]}}]}).to_string())
        .create_async()
        .await;

    let config = Config::new(Some("k".to_string()))
        .with_model("gemini-test")
        .with_api_base(format!("{}/", server.url()));
    let response = handle(&post(&json!({"type": "game", "query": "דומינו"})), &config, &client()).await;

    upstream.assert_async().await;
    assert_eq!(response.status_code, 200);
}

#[tokio::test]
async fn test_upstream_rejection_is_relayed() {
    let mut server = mockito::Server::new_async().await;
    let _upstream = server
        .mock("POST", Matcher::Regex(GENERATE_PATH.to_string()))
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(
            json!({"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}})
                .to_string(),
        )
        .create_async()
        .await;

    let config = Config::new(Some("bad".to_string())).with_api_base(server.url());
    let response = handle(&post(&json!({"type": "topic", "query": "Q"})), &config, &client()).await;

    assert_eq!(response.status_code, 500);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["error"], "API key not valid. Please pass a valid API key.");
}

#[tokio::test]
async fn test_non_json_upstream_body_is_a_server_error() {
    let mut server = mockito::Server::new_async().await;
    let _upstream = server
        .mock("POST", Matcher::Regex(GENERATE_PATH.to_string()))
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let config = Config::new(Some("k".to_string())).with_api_base(server.url());
    let response = handle(&post(&json!({"type": "topic", "query": "Q"})), &config, &client()).await;

    assert_eq!(response.status_code, 500);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert!(body["error"].as_str().unwrap().contains("Failed to parse response"));
}

#[tokio::test]
async fn test_blocked_generation_is_a_server_error() {
    let mut server = mockito::Server::new_async().await;
    let _upstream = server
        .mock("POST", Matcher::Regex(GENERATE_PATH.to_string()))
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"promptFeedback": {"blockReason": "SAFETY"}}).to_string())
        .create_async()
        .await;

    let config = Config::new(Some("k".to_string())).with_api_base(server.url());
    let response = handle(&post(&json!({"type": "topic", "query": "Q"})), &config, &client()).await;

    assert_eq!(response.status_code, 500);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert!(body["error"].as_str().unwrap().contains("SAFETY"));
}
