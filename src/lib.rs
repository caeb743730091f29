//! findbar library - find-in-page toolbar for a terminal page viewer
//!
//! This library exposes the widget and its collaborators for the binary
//! and for testing.

pub mod app;
pub mod browser;
pub mod config;
pub mod error;
pub mod findbar;
pub mod source;

#[cfg(test)]
pub mod test_utils;
pub mod theme;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use findbar::Findbar;
