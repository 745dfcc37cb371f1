//! Consensus Layer News
//!
//! A rewriting proxy for a single upstream news page and its sub-pages.
//!
//! ```text
//!   GET /                 ─┐
//!   GET /news/{id}        ─┼─▶ uri limit ─▶ fetch upstream ─▶ rewrite rules ─▶ (disclaimer) ─▶ 200 text/html
//!   GET /forward/{rest}   ─┴─▶ uri limit ─▶ fetch upstream ─────────────────────────────────▶ streamed body
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod rewrite;
pub mod routing;
pub mod security;
pub mod upstream;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
