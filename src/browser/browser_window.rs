/// Identity of a top-level window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u32);

/// Requests the findbar sends to the window that displays the page
pub trait BrowserWindow {
    /// Find the next occurrence of `phrase`, searching forward
    fn find_text(&mut self, phrase: &str, case_sensitive: bool);

    /// Clear any active match highlight and search position
    fn reset_find_state(&mut self);

    /// Give keyboard focus back to the page view
    fn focus_main_content(&mut self);
}

/// Resolves a window identity to its browser window, if it still exists
pub trait WindowLookup {
    fn browser_window(&mut self, id: WindowId) -> Option<&mut dyn BrowserWindow>;
}
