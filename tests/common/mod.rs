//! In-process stand-in for the stays API.
//!
//! Responses are scripted in order; every request is recorded with the
//! headers the client is expected to send.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use stays_browser::{ClientConfig, StaysClient};

pub const APP_ID: &str = "3f1c-test-tenant";
pub const LIST_JSON: &str = include_str!("../fixtures/list.json");
pub const PROPERTY_JSON: &str = include_str!("../fixtures/property.json");

#[derive(Debug, Clone, PartialEq)]
pub struct Seen {
    pub path: String,
    pub app_id: Option<String>,
    pub accept: Option<String>,
}

#[derive(Clone)]
struct Script {
    responses: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
    seen: Arc<Mutex<Vec<Seen>>>,
    delay: Duration,
}

pub struct FixtureApi {
    pub addr: SocketAddr,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl FixtureApi {
    /// Serve `responses` in order, one per request
    pub async fn start(responses: Vec<(StatusCode, &str)>) -> Self {
        Self::start_with_delay(responses, Duration::ZERO).await
    }

    pub async fn start_with_delay(responses: Vec<(StatusCode, &str)>, delay: Duration) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let script = Script {
            responses: Arc::new(Mutex::new(
                responses
                    .into_iter()
                    .map(|(status, body)| (status, body.to_string()))
                    .collect(),
            )),
            seen: seen.clone(),
            delay,
        };

        let app = Router::new().fallback(respond).with_state(script);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, seen }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> StaysClient {
        StaysClient::with_config(ClientConfig::new(self.base_url(), APP_ID)).unwrap()
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}

async fn respond(State(script): State<Script>, uri: Uri, headers: HeaderMap) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    script.seen.lock().unwrap().push(Seen {
        path: uri.path().to_string(),
        app_id: header("x-app-id"),
        accept: header("accept"),
    });

    if !script.delay.is_zero() {
        tokio::time::sleep(script.delay).await;
    }

    let next = script.responses.lock().unwrap().pop_front();
    next.unwrap_or((StatusCode::NOT_FOUND, String::new()))
}

/// An address nothing is listening on
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
