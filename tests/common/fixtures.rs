// Test fixtures

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Course records shared across tests, in the shape of the source file:
/// full records with descriptions, which the summary projection strips.
pub const SAMPLE_COURSES: &str = r#"[
  {
    "subject": "CS",
    "number": "124",
    "label": "Introduction to Computer Science I",
    "description": "Basic concepts in computing."
  },
  {
    "subject": "CS",
    "number": "128",
    "label": "Introduction to Computer Science II",
    "description": "Continuation of CS 124."
  },
  {
    "subject": "CS",
    "number": "173",
    "label": "Discrete Structures",
    "description": "Discrete mathematical structures."
  },
  {
    "subject": "CS",
    "number": "225",
    "label": "Data Structures",
    "description": "Elementary data structures and their implementation."
  }
]"#;

/// Number of records in [`SAMPLE_COURSES`]
pub const SAMPLE_COURSE_COUNT: usize = 4;

/// A course data file living in a temporary directory
pub struct CourseFile {
    #[allow(dead_code)] // Holds the directory alive for the fixture's lifetime
    dir: TempDir,
    pub path: PathBuf,
}

impl CourseFile {
    pub fn new(contents: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("courses.json");
        fs::write(&path, contents).expect("Failed to write course data");
        Self { dir, path }
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn sample() -> Self {
        Self::new(SAMPLE_COURSES)
    }

    /// Delete the underlying file, e.g. to prove nothing re-reads it
    #[allow(dead_code)] // Used in integration tests
    pub fn delete(&self) {
        fs::remove_file(&self.path).expect("Failed to delete course data");
    }
}
