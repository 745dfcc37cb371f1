//! Upstream access.
//!
//! One process-wide [`UpstreamClient`] is shared by all handlers. It holds
//! no per-call mutable state; reqwest pools connections internally.

pub mod client;

pub use client::{read_bounded, UpstreamClient};
