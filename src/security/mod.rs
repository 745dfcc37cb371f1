//! Input hardening.
//!
//! Only the two hard request bounds live here; the gateway has no
//! authentication or rate limiting.

pub mod limits;

pub use limits::{uri_limit_middleware, RequestLimits};
