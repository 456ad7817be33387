//! Integration tests for info-service.
//!
//! Run with: cargo test -p info-service --test info_endpoint

use info_service::startup::Application;
use reqwest::Client;
use service_core::config::Config;

/// Spawn the application on a random port and return the port number.
async fn spawn_app() -> u16 {
    let config = Config {
        port: 0,
        log_level: "info".to_string(),
    };

    let app = Application::build(config)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}

#[tokio::test]
async fn info_document_has_documented_shape() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/", port))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let object = body.as_object().expect("body is not a JSON object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "browsers",
            "built_at",
            "description",
            "download",
            "features",
            "github",
            "name",
            "tagline",
            "version",
        ]
    );

    let features = body["features"].as_array().expect("features is not a list");
    assert_eq!(features.len(), 6);
    for feature in features {
        assert!(!feature["id"].as_str().unwrap().is_empty());
        assert!(!feature["title"].as_str().unwrap().is_empty());
        assert!(!feature["description"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn content_length_matches_body_exactly() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/", port))
        .send()
        .await
        .expect("Failed to send request");

    let content_length: usize = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .expect("missing content-length");
    let body = response.bytes().await.expect("Failed to read body");

    assert_eq!(content_length, body.len());
}

#[tokio::test]
async fn non_get_verbs_are_not_rejected() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/", port))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn options_returns_204_with_cors() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, format!("http://localhost:{}/", port))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "info-service");
}
