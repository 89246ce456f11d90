//! Integration tests for Telegram delivery: splitting, fallback, rejection.

use marketbrief::error::NotifyError;
use marketbrief::notifiers::telegram::{TelegramNotifier, MAX_MESSAGE_LENGTH};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn notifier(server: &MockServer) -> TelegramNotifier {
    TelegramNotifier::with_base_url(server.uri(), "123:token", "42")
}

#[tokio::test]
async fn sends_html_message_with_chat_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:token/sendMessage"))
        .and(body_partial_json(json!({
            "chat_id": "42",
            "parse_mode": "HTML"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let result = notifier(&server).send_message("<b>Daily Brief</b>").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn long_message_is_sent_in_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:token/sendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(2)
        .mount(&server)
        .await;

    let section = "x".repeat(3000);
    let message = format!("{0}\n\n{0}", section);
    assert!(message.len() > MAX_MESSAGE_LENGTH);

    let result = notifier(&server).send_message(&message).await;
    assert!(result.is_ok());

    let requests = server.received_requests().await.unwrap();
    for request in &requests {
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        assert!(body["text"].as_str().unwrap().len() <= MAX_MESSAGE_LENGTH);
    }
}

#[tokio::test]
async fn rejected_html_falls_back_to_plain_text() {
    let server = MockServer::start().await;
    // First matching mock wins: HTML sends are rejected, the plain retry
    // falls through to the accept-all mock.
    Mock::given(method("POST"))
        .and(path("/bot123:token/sendMessage"))
        .and(body_partial_json(json!({ "parse_mode": "HTML" })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "description": "Bad Request: can't parse entities"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/bot123:token/sendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let result = notifier(&server)
        .send_message("<b>S&amp;P 500 brief</b>")
        .await;
    assert!(result.is_ok());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let retry: Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert!(retry.get("parse_mode").is_none());
    assert_eq!(retry["text"], "S&P 500 brief");
}

#[tokio::test]
async fn double_rejection_surfaces_the_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:token/sendMessage"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "ok": false,
            "description": "Forbidden: bot was blocked by the user"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let err = notifier(&server).send_message("hello").await.unwrap_err();
    match err {
        NotifyError::Rejected {
            status,
            description,
        } => {
            assert_eq!(status, 403);
            assert!(description.contains("blocked"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn error_notification_is_wrapped_in_code_block() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:token/sendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    notifier(&server)
        .send_error("all 3 instruments failed")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let text = body["text"].as_str().unwrap();
    assert!(text.starts_with("<b>Market Brief Error</b>"));
    assert!(text.contains("<code>all 3 instruments failed</code>"));
}
