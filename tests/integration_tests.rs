//! Integration tests for the action webhook

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use booking_slot_actions::ActionRegistry;
use booking_slot_actions::server::{AppState, create_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn call(method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    tokio_test::block_on(async {
        let router = create_router(AppState::new(ActionRegistry::booking()));
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(body) => Body::from(body.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    })
}

fn action_call(action: &str, slots: Value) -> Value {
    json!({
        "next_action": action,
        "sender_id": "webhook-test",
        "tracker": {
            "sender_id": "webhook-test",
            "slots": slots,
            "latest_message": {"text": "hi"},
            "events": []
        },
        "domain": {"slots": {}},
        "version": "3.8.0"
    })
}

#[test]
fn test_webhook_validates_guest_count() {
    let (status, body) = call(
        "POST",
        "/webhook",
        Some(action_call("validate_num_guests", json!({"num_guests": "just me"}))),
    );

    assert_eq!(status, StatusCode::OK);
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "slot");
    assert_eq!(events[0]["name"], "num_guests");
    assert_eq!(events[0]["value"], "1");
    assert!(events[0]["timestamp"].is_number());
    assert_eq!(body["responses"], json!([]));
}

#[test]
fn test_webhook_returns_clarification_message() {
    let (status, body) = call(
        "POST",
        "/webhook",
        Some(action_call("validate_num_rooms", json!({"num_rooms": 11}))),
    );

    assert_eq!(status, StatusCode::OK);
    assert!(body["events"][0]["value"].is_null());
    let text = body["responses"][0]["text"].as_str().unwrap();
    assert!(text.contains("10 rooms"));
}

#[test]
fn test_webhook_unknown_action() {
    let (status, body) = call(
        "POST",
        "/webhook",
        Some(action_call("action_does_not_exist", json!({}))),
    );

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["action_name"], "action_does_not_exist");
    assert_eq!(
        body["error"],
        "No registered action found for name 'action_does_not_exist'."
    );
}

fn post_raw(body: &str) -> StatusCode {
    tokio_test::block_on(async {
        let router = create_router(AppState::new(ActionRegistry::booking()));
        let request = Request::builder()
            .method("POST")
            .uri("/webhook")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        router.oneshot(request).await.unwrap().status()
    })
}

#[test]
fn test_webhook_rejects_malformed_body() {
    let status = post_raw(r#"{"next_action": "#);

    assert!(status.is_client_error(), "got {status}");
}

#[test]
fn test_webhook_rejects_missing_action_name() {
    let status = post_raw(r#"{"tracker": {"slots": {}}}"#);

    assert!(status.is_client_error(), "got {status}");
}

#[test]
fn test_webhook_empty_action_name() {
    let (status, body) = call("POST", "/webhook", Some(action_call("  ", json!({}))));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["action_name"], "");
}

#[test]
fn test_list_actions_and_health() {
    let (status, body) = call("GET", "/actions", None);
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|entry| entry["name"].as_str())
        .collect();
    assert!(names.contains(&"validate_num_guests"));
    assert!(names.contains(&"action_format_numbers"));

    let (status, body) = call("GET", "/health", None);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}
