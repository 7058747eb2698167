//! Specsketch library - core functionality for prompt-to-spec generation.
//!
//! This crate provides:
//! - Chat-completions client and spec generation (`ai`)
//! - Environment-derived configuration (`config`)
//! - Unified error type (`error`)
//! - Backing data-service liveness probe (`keepalive`)
//!
//! Feature flags:
//! - `cli`: Command-line interface
//! - `server`: HTTP server and embedded web UI

// Core modules (always compiled)
pub mod ai;
pub mod config;
pub mod error;
pub mod keepalive;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Server module (feature-gated)
#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use ai::spec::GeneratedSpec;
pub use error::AppError;
