use std::net::SocketAddr;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};

use mealsnap_api::application::http::server::http_server;
use mealsnap_api::args::Args;

/// How the stub upstream answers `/v1/chat/completions`.
#[derive(Clone)]
pub enum UpstreamBehavior {
    Reply(String),
    Error(u16),
    EmptyChoices,
    Hang(Duration),
}

#[derive(Clone)]
struct StubState {
    behavior: UpstreamBehavior,
    hits: Arc<AtomicUsize>,
}

pub struct StubUpstream {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl StubUpstream {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn completions(
    State(state): State<StubState>,
    _body: Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match &state.behavior {
        UpstreamBehavior::Reply(text) => (
            StatusCode::OK,
            Json(json!({"choices": [{"message": {"content": text}}]})),
        ),
        UpstreamBehavior::Error(status) => (
            StatusCode::from_u16(*status).unwrap(),
            Json(json!({"error": {"message": "upstream exploded"}})),
        ),
        UpstreamBehavior::EmptyChoices => (StatusCode::OK, Json(json!({"choices": []}))),
        UpstreamBehavior::Hang(delay) => {
            tokio::time::sleep(*delay).await;
            (
                StatusCode::OK,
                Json(json!({"choices": [{"message": {"content": "late"}}]})),
            )
        }
    }
}

pub async fn spawn_upstream(behavior: UpstreamBehavior) -> StubUpstream {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = StubState {
        behavior,
        hits: hits.clone(),
    };
    let app = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubUpstream {
        base_url: format!("http://{addr}/v1"),
        hits,
    }
}

/// Test server wired to the stub upstream: static menu source, 1s inference
/// timeout.
pub fn server_with_upstream(base_url: &str) -> TestServer {
    let args = Arc::new(Args::parse_from([
        "mealsnap",
        "--openai-api-key",
        "test-key",
        "--openai-base-url",
        base_url,
        "--menu-source",
        "static",
        "--inference-timeout-secs",
        "1",
    ]));

    let state = http_server::state(args).unwrap();
    TestServer::try_new(http_server::router(state).unwrap()).unwrap()
}
