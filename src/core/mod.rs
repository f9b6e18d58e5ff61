//! Core functionality shared by the server and client halves.
//!
//! This module contains the domain types, configuration handling, and
//! error types everything else is built from.

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{CourseableError, Result};
pub use types::{Summary, DEFAULT_PORT, SENTINEL};
