// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in unit tests but are used in integration tests
#[allow(unused_imports)]
pub use fixtures::{CourseFile, SAMPLE_COURSES, SAMPLE_COURSE_COUNT};
#[allow(unused_imports)]
pub use helpers::{free_port, spawn_router, spawn_server, test_app, test_config};
