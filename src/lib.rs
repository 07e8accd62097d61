// Library exports for integration tests and reusable components

pub mod config;
pub mod open_library;
pub mod search;
pub mod ui;

// Re-export the launch context at crate root for easier access
pub use ui::AppContext;

// Test support (unit tests, or integration tests with the test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
