//! Findbar module
//!
//! A find-in-page toolbar shown below the page: a hide button, the search
//! phrase input, a Next button and a case-sensitivity checkbox. User intent
//! is forwarded to the browser window the bar is attached to.

pub mod findbar_events;
mod findbar_layout;
pub mod findbar_render;
mod findbar_state;
mod icon;
mod search_input;

pub use findbar_layout::{Control, FindbarLayout, LayoutMetrics};
pub use findbar_state::Findbar;
pub use icon::{Icon, IconAtlas};
pub use search_input::{InputResponse, SearchInput};
