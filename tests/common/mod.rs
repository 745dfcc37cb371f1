//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use consensus_layer_news::config::GatewayConfig;
use consensus_layer_news::http::HttpServer;
use consensus_layer_news::lifecycle::Shutdown;
use consensus_layer_news::GatewayError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Canned upstream answer.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub delay: Duration,
}

impl MockResponse {
    pub fn html(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            ..Self::html("upstream error page")
        }
    }
}

/// Handle on a running mock upstream.
#[derive(Clone)]
pub struct MockUpstream {
    pub addr: SocketAddr,
    hits: Arc<AtomicU32>,
    paths: Arc<Mutex<Vec<String>>>,
}

impl MockUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hits(&self) -> u32 {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

/// Start a mock upstream that always returns `response`.
pub async fn start_mock_upstream(response: MockResponse) -> MockUpstream {
    start_programmable_upstream(move |_path| {
        let response = response.clone();
        async move { response }
    })
    .await
}

/// Start a programmable mock upstream; `f` receives the request path.
pub async fn start_programmable_upstream<F, Fut>(f: F) -> MockUpstream
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = MockResponse> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let upstream = MockUpstream {
        addr: listener.local_addr().unwrap(),
        hits: Arc::new(AtomicU32::new(0)),
        paths: Arc::new(Mutex::new(Vec::new())),
    };
    let f = Arc::new(f);
    let state = upstream.clone();

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            let f = f.clone();
            let state = state.clone();
            tokio::spawn(async move {
                serve_one(socket, f, state).await;
            });
        }
    });

    upstream
}

async fn serve_one<F, Fut>(mut socket: TcpStream, f: Arc<F>, state: MockUpstream)
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = MockResponse>,
{
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }

    let path = String::from_utf8_lossy(&head)
        .split_whitespace()
        .nth(1)
        .unwrap_or("")
        .to_string();
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.paths.lock().unwrap().push(path.clone());

    let response = (*f)(path).await;
    tokio::time::sleep(response.delay).await;

    let reason = match response.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason,
        response.content_type,
        response.body.len()
    );
    let _ = socket.write_all(head.as_bytes()).await;
    let _ = socket.write_all(&response.body).await;
    let _ = socket.shutdown().await;
}

/// Gateway config pointing at `upstream`, with test-friendly site identity.
pub fn config_for(upstream: &MockUpstream) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.upstream.base_url = upstream.base_url();
    config.upstream.use_env_proxy = false;
    config.site.self_url = "https://consensuslayer.news".into();
    config.site.domain = "consensuslayer.news".into();
    config
}

/// A running gateway under test.
pub struct TestGateway {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), GatewayError>>,
}

impl TestGateway {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the gateway on an ephemeral port.
pub async fn start_gateway(config: GatewayConfig) -> TestGateway {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestGateway {
        addr,
        shutdown,
        handle,
    }
}

/// Client that never goes through an environment proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
