//! CLI command implementations

pub mod serve;
pub mod summaries;

pub use serve::ServeArgs;
pub use summaries::SummariesArgs;
