use crate::browser::{PageWindow, WindowId, WindowRegistry};
use crate::config::Config;
use crate::findbar::findbar_render::FINDBAR_HEIGHT;
use crate::findbar::{Findbar, IconAtlas};

/// Findbar width before the first render lays it out against the terminal
const INITIAL_FINDBAR_WIDTH: u16 = 80;

pub struct App {
    pub windows: WindowRegistry<PageWindow>,
    pub window_id: WindowId,
    pub findbar: Findbar,
    pub should_quit: bool,
    /// Config problem reported on the status line until the first key press
    pub warning: Option<String>,
}

impl App {
    pub fn new(title: &str, text: &str, config: &Config, icons: &IconAtlas) -> Self {
        let mut windows = WindowRegistry::new();
        let window_id = windows.insert(PageWindow::new(title, text));

        let mut findbar = Findbar::with_config(
            INITIAL_FINDBAR_WIDTH,
            FINDBAR_HEIGHT,
            &config.findbar,
            icons,
        );
        findbar.attach(window_id);

        Self {
            windows,
            window_id,
            findbar,
            should_quit: false,
            warning: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn page(&self) -> Option<&PageWindow> {
        self.windows.get(self.window_id)
    }

    pub fn page_mut(&mut self) -> Option<&mut PageWindow> {
        self.windows.get_mut(self.window_id)
    }

    /// Shows the findbar and takes keyboard focus away from the page
    pub fn open_findbar(&mut self) {
        self.findbar.show();
        if let Some(page) = self.page_mut() {
            page.set_content_focused(false);
        }
    }
}
