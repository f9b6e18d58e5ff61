//! Pre-serialized course summary payload.
//!
//! The source records are read and parsed exactly once, when the cache is
//! built. Every later request is answered from the same serialized string,
//! so responses are byte-identical for the lifetime of the server and the
//! source file is never touched again.

use std::fs;
use std::path::Path;

use crate::core::error::{CourseableError, Result};
use crate::core::types::Summary;

/// Immutable cache of course summaries and their serialized form.
///
/// Parsing the source through [`Summary`] strips any fields the summary
/// projection does not carry, so the served payload contains only the
/// subject, number, and label of each course.
#[derive(Debug, Clone)]
pub struct SummaryCache {
    summaries: Vec<Summary>,
    body: String,
}

impl SummaryCache {
    /// Build the cache from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| {
            CourseableError::DataError(format!(
                "Failed to read course data {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_source(&source)
    }

    /// Build the cache from raw JSON source.
    ///
    /// The source must be a JSON array of course records. Records keep
    /// their source order in the serialized payload.
    pub fn from_source(source: &str) -> Result<Self> {
        let summaries: Vec<Summary> = serde_json::from_str(source)
            .map_err(|e| CourseableError::DataError(format!("Failed to parse course data: {}", e)))?;
        let body = serde_json::to_string_pretty(&summaries)?;
        Ok(Self { summaries, body })
    }

    /// The serialized payload served for summary requests.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The parsed summaries, in source order.
    pub fn summaries(&self) -> &[Summary] {
        &self.summaries
    }

    /// Number of cached summaries.
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}
