//! Page rewriting subsystem.
//!
//! # Data Flow
//! ```text
//! upstream body (bounded, lossy UTF-8)
//!     → rules.rs (ordered literal substitutions)
//!     → disclaimer.rs (banner splice, /news/{id} only)
//!     → response body
//! ```

pub mod disclaimer;
pub mod rules;

pub use disclaimer::{inject_disclaimer, BODY_MARKER, DISCLAIMER_HTML};
pub use rules::{RewriteRules, Rule};
