use std::collections::HashMap;

use super::browser_window::{BrowserWindow, WindowId, WindowLookup};

/// Browser windows keyed by window identity
pub struct WindowRegistry<W> {
    windows: HashMap<WindowId, W>,
    next_id: u32,
}

impl<W> Default for WindowRegistry<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> WindowRegistry<W> {
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            next_id: 1,
        }
    }

    /// Registers a window and returns its fresh identity
    pub fn insert(&mut self, window: W) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.windows.insert(id, window);

        #[cfg(debug_assertions)]
        log::debug!("Registry: window {:?} registered", id);

        id
    }

    pub fn remove(&mut self, id: WindowId) -> Option<W> {
        #[cfg(debug_assertions)]
        log::debug!("Registry: window {:?} removed", id);

        self.windows.remove(&id)
    }

    pub fn get(&self, id: WindowId) -> Option<&W> {
        self.windows.get(&id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut W> {
        self.windows.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

impl<W: BrowserWindow> WindowLookup for WindowRegistry<W> {
    fn browser_window(&mut self, id: WindowId) -> Option<&mut dyn BrowserWindow> {
        self.windows
            .get_mut(&id)
            .map(|window| window as &mut dyn BrowserWindow)
    }
}
