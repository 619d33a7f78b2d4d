use chat_relay::client::{
    Author, ChatController, Completion, HttpRelay, RelayTransport, TRANSPORT_FALLBACK,
    TransportError,
};
use chat_relay::config::ProviderConfig;
use chat_relay::routes::create_router;
use chat_relay::state::AppState;

use async_trait::async_trait;
use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Echo {
    calls: AtomicUsize,
}

impl Echo {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RelayTransport for Echo {
    async fn send(&self, message: &str) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("echo {message}."))
    }
}

struct Down;

#[async_trait]
impl RelayTransport for Down {
    async fn send(&self, _message: &str) -> Result<String, TransportError> {
        Err(TransportError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
    }
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Relay server wired to a fake provider that answers every prompt with `provider`.
async fn spawn_relay(provider: Router) -> String {
    let provider_url = spawn(provider).await;
    let state = Arc::new(AppState::hugging_face(ProviderConfig {
        api_key: Some("hf_test".to_string()),
        model_url: format!("{provider_url}/models/test"),
    }));
    spawn(create_router("public").with_state(state)).await
}

#[tokio::test]
async fn blank_input_is_a_no_op() {
    let transport = Echo::new();
    let mut controller = ChatController::new();

    controller.set_input("   \t ");
    controller.send_message(&transport).await;

    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    assert!(controller.transcript().is_empty());
}

#[tokio::test]
async fn success_appends_user_then_reply() {
    let transport = Echo::new();
    let mut controller = ChatController::new();

    controller.set_input("  hi  ");
    controller.send_message(&transport).await;

    assert_eq!(controller.transcript().texts(), vec!["hi", "echo hi."]);
    let authors: Vec<Author> = controller
        .transcript()
        .entries()
        .iter()
        .map(|e| e.author)
        .collect();
    assert_eq!(authors, vec![Author::User, Author::Relay]);
    assert_eq!(
        controller.transcript().scroll_position(),
        controller.transcript().len()
    );
}

#[tokio::test]
async fn input_is_cleared_before_the_reply_arrives() {
    let mut controller = ChatController::new();
    controller.set_input("hello");

    let pending = controller.submit().unwrap();
    assert_eq!(controller.input(), "");
    assert_eq!(controller.transcript().texts(), vec!["hello"]);
    assert_eq!(controller.transcript().pending(), 1);

    let completion = pending.dispatch(&Echo::new()).await;
    controller.resolve(completion);
    assert_eq!(controller.transcript().pending(), 0);
}

#[tokio::test]
async fn failure_appends_fallback_and_keeps_going() {
    let mut controller = ChatController::new();

    controller.set_input("first");
    controller.send_message(&Down).await;
    controller.set_input("second");
    controller.send_message(&Echo::new()).await;

    assert_eq!(
        controller.transcript().texts(),
        vec!["first", TRANSPORT_FALLBACK, "second", "echo second."]
    );
}

#[tokio::test]
async fn late_replies_land_next_to_their_message() {
    let mut controller = ChatController::new();

    controller.set_input("one");
    let first = controller.submit().unwrap();
    controller.set_input("two");
    let second = controller.submit().unwrap();
    assert!(second.seq > first.seq);

    controller.resolve(Completion {
        seq: second.seq,
        outcome: Ok("reply two.".to_string()),
    });
    controller.resolve(Completion {
        seq: first.seq,
        outcome: Ok("reply one.".to_string()),
    });

    assert_eq!(
        controller.transcript().texts(),
        vec!["one", "reply one.", "two", "reply two."]
    );
}

#[tokio::test]
async fn end_to_end_hello() {
    let provider = Router::new().route(
        "/models/test",
        post(|| async { Json(json!([{ "generated_text": " Hi there! " }])) }),
    );
    let relay = HttpRelay::new(&spawn_relay(provider).await);

    let mut controller = ChatController::new();
    controller.set_input("Hello");
    controller.send_message(&relay).await;

    assert_eq!(controller.transcript().texts(), vec!["Hello", "Hi there!."]);
}

#[tokio::test]
async fn end_to_end_provider_failure_shows_fallback() {
    let provider = Router::new().route(
        "/models/test",
        post(|| async { (StatusCode::UNAUTHORIZED, "bad token") }),
    );
    let relay = HttpRelay::new(&spawn_relay(provider).await);

    let mut controller = ChatController::new();
    controller.set_input("Hello");
    controller.send_message(&relay).await;

    assert_eq!(
        controller.transcript().texts(),
        vec!["Hello", TRANSPORT_FALLBACK]
    );
}

#[tokio::test]
async fn malformed_relay_body_shows_fallback() {
    let fake_relay = Router::new().route(
        "/chat",
        post(|| async { Json(json!({ "unexpected": true })) }),
    );
    let relay = HttpRelay::new(&spawn(fake_relay).await);

    let mut controller = ChatController::new();
    controller.set_input("Hello");
    controller.send_message(&relay).await;

    assert_eq!(
        controller.transcript().texts(),
        vec!["Hello", TRANSPORT_FALLBACK]
    );
}

#[tokio::test]
async fn unreachable_relay_shows_fallback() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let relay = HttpRelay::new(&format!("http://{addr}"));

    let mut controller = ChatController::new();
    controller.set_input("Hello");
    controller.send_message(&relay).await;

    assert_eq!(
        controller.transcript().texts(),
        vec!["Hello", TRANSPORT_FALLBACK]
    );
}
