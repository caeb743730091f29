//! Browser-window collaborators of the findbar
//!
//! The findbar never owns or caches a browser window. It remembers the
//! `WindowId` of the window it belongs to and resolves the window through a
//! `WindowLookup` each time it needs one.

mod browser_window;
mod page_window;
mod window_registry;

pub use browser_window::{BrowserWindow, WindowId, WindowLookup};
pub use page_window::{FindOutcome, PageWindow, TextMatch};
pub use window_registry::WindowRegistry;
