//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → axum router (GET /, GET /news/{newsid}, GET /forward/{*rest})
//!     → router.rs (Route value)
//!     → Return: upstream URL + rewrite/disclaimer flags
//! ```
//!
//! # Design Decisions
//! - Routes fixed at startup, immutable at runtime
//! - Prefix stripping only, no regex
//! - Deterministic: same path always yields the same upstream URL

pub mod router;

pub use router::{Route, FORWARD_PREFIX};
