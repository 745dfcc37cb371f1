//! Local stand-in for the upstream news site.
//!
//! ```text
//! cargo run --example fixture_upstream
//! cargo run -- --upstream http://127.0.0.1:8081
//! ```

use axum::{extract::Path, response::Html, routing::get, Router};
use std::net::SocketAddr;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>What's New in Eth2 - HackMD</title>
<script>window.domain = 'hackmd.io'; window.urlpath = '';</script>
</head>
<body style="display:none;">
<h1 id="newineth2">What's New in Eth2</h1>
<p>Ethereum 2.0 progress, ETH2 staking and the eth1 merge.</p>
<p>Older issues: <a href="https://hackmd.io/@benjaminion/wnie2_210423">23 April</a></p>
</body>
</html>
"#;

async fn news(Path(issue): Path<String>) -> Html<String> {
    Html(PAGE.replace("What's New in Eth2", &format!("What's New in Eth2 ({})", issue)))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = Router::new()
        .route("/@benjaminion/eth2_news", get(|| async { Html(PAGE) }))
        .route("/@benjaminion/{issue}", get(news));

    let addr = SocketAddr::from(([127, 0, 0, 1], 8081));
    println!("Fixture upstream listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
