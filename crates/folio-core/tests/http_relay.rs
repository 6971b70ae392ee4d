//! Contact submissions against a local relay server.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::Form;
use axum::http::{HeaderMap, StatusCode, header::ACCEPT};
use axum::routing::post;
use axum::Router;
use parking_lot::Mutex;
use tokio::net::TcpListener;

use folio_core::{ContactForm, ContactSubmitter, HttpFormRelay, SubmissionStatus};

type Received = Arc<Mutex<Vec<(Option<String>, HashMap<String, String>)>>>;

/// Starts a relay that records each request and answers with `status`.
async fn spawn_relay(status: StatusCode) -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();

    let app = Router::new().route(
        "/f/test",
        post(move |headers: HeaderMap, Form(fields): Form<HashMap<String, String>>| {
            let sink = sink.clone();
            async move {
                let accept = headers
                    .get(ACCEPT)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                sink.lock().push((accept, fields));
                status
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/f/test"), received)
}

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Grace".to_string(),
        reply_to: "grace@example.com".to_string(),
        message: "Let's talk about compilers.".to_string(),
    }
}

#[tokio::test]
async fn test_accepted_submission_is_success() {
    let (endpoint, received) = spawn_relay(StatusCode::OK).await;
    let submitter = ContactSubmitter::new(Arc::new(HttpFormRelay::new(endpoint)));
    let mut form = filled_form();

    let pending = submitter.submit(&mut form).unwrap();
    assert!(form.is_blank(), "form must clear before the request resolves");
    assert_eq!(pending.await, SubmissionStatus::Success);

    let received = received.lock();
    assert_eq!(received.len(), 1);
    let (accept, fields) = &received[0];
    assert_eq!(accept.as_deref(), Some("application/json"));
    assert_eq!(fields.get("name").map(String::as_str), Some("Grace"));
    assert_eq!(fields.get("_replyto").map(String::as_str), Some("grace@example.com"));
    assert_eq!(
        fields.get("message").map(String::as_str),
        Some("Let's talk about compilers.")
    );
}

#[tokio::test]
async fn test_client_and_server_errors_are_error() {
    for status in [StatusCode::BAD_REQUEST, StatusCode::INTERNAL_SERVER_ERROR] {
        let (endpoint, received) = spawn_relay(status).await;
        let submitter = ContactSubmitter::new(Arc::new(HttpFormRelay::new(endpoint)));
        let mut form = filled_form();

        let pending = submitter.submit(&mut form).unwrap();
        assert!(form.is_blank());
        assert_eq!(pending.await, SubmissionStatus::Error);
        assert_eq!(received.lock().len(), 1, "no retry after {status}");
    }
}

#[tokio::test]
async fn test_unreachable_relay_is_error() {
    // Reserve a port, then close it so the connection is refused.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let relay = HttpFormRelay::new(format!("http://{addr}/f/test"));
    let submitter = ContactSubmitter::new(Arc::new(relay));
    let mut form = filled_form();

    let pending = submitter.submit(&mut form).unwrap();
    assert!(form.is_blank());
    assert_eq!(pending.await, SubmissionStatus::Error);
}
