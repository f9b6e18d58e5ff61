//! Courseable - Development-Mode Course API
//!
//! A small client/server pair for serving and fetching a fixed set of
//! course summaries over HTTP during development. The server answers an
//! identity probe so clients can tell it apart from strangers on the
//! same port; the client refuses to issue requests until that probe has
//! been answered correctly.
//!
//! # Architecture
//!
//! The codebase is organized into four main modules:
//!
//! - **core**: Domain logic shared by both halves
//!   - config, error, types
//!
//! - **server**: HTTP server adapter (depends on core)
//!   - dispatch table, summary cache, middleware
//!
//! - **client**: HTTP client adapter (depends on core)
//!   - connection monitor, request queue, result envelopes
//!
//! - **cli**: Command-line adapter over both halves
//!
//! # Key Features
//!
//! - Identity probe (a sentinel body, not just a status, proves the
//!   server is ours)
//! - Course data read once at startup, served byte-identical after
//! - Ordered dispatch table with permissive path normalization
//! - Client requests queue until the connection resolves
//! - Failures delivered as envelopes, surfacing only at value access

// Core domain logic shared by both halves
pub mod core;

// HTTP server adapter
pub mod server;

// HTTP client adapter
pub mod client;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::client::{Client, ConnectionState, Outcome, RequestError};
pub use crate::core::config::Config;
pub use crate::core::error::{CourseableError, Result};
pub use crate::core::types::{Summary, DEFAULT_PORT, SENTINEL};
pub use crate::server::{Server, ServerHandle, ServerState};
