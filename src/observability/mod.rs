//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers, middleware, lifecycle
//!     → tracing events with structured fields
//!     → logging.rs (EnvFilter + fmt layer, pretty or JSON)
//!     → stdout
//! ```
//!
//! Request spans come from tower-http's `TraceLayer` and carry the request ID.

pub mod logging;
