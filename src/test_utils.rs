//! Shared test utilities for findbar
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::browser::{BrowserWindow, WindowId, WindowRegistry};
    use crate::config::Config;
    use crate::findbar::{Findbar, IconAtlas};
    use ratatui::crossterm::event::{
        Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    };

    /// Test fixture page text
    pub const TEST_PAGE: &str = "The quick brown fox\njumps over the lazy dog\nthe end";

    /// A request received by `RecordingWindow`
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Request {
        Find {
            phrase: String,
            case_sensitive: bool,
        },
        Reset,
        FocusMain,
    }

    /// Browser window that records every request it receives
    #[derive(Debug, Default)]
    pub struct RecordingWindow {
        pub requests: Vec<Request>,
    }

    impl RecordingWindow {
        pub fn find_requests(&self) -> Vec<&Request> {
            self.requests
                .iter()
                .filter(|r| matches!(r, Request::Find { .. }))
                .collect()
        }
    }

    impl BrowserWindow for RecordingWindow {
        fn find_text(&mut self, phrase: &str, case_sensitive: bool) {
            self.requests.push(Request::Find {
                phrase: phrase.to_string(),
                case_sensitive,
            });
        }

        fn reset_find_state(&mut self) {
            self.requests.push(Request::Reset);
        }

        fn focus_main_content(&mut self) {
            self.requests.push(Request::FocusMain);
        }
    }

    /// A findbar attached to a registered recording window
    pub struct Fixture {
        pub findbar: Findbar,
        pub windows: WindowRegistry<RecordingWindow>,
        pub window_id: WindowId,
        pub icons: IconAtlas,
    }

    impl Fixture {
        pub fn requests(&self) -> &[Request] {
            &self.windows.get(self.window_id).unwrap().requests
        }

        pub fn find_count(&self) -> usize {
            self.windows.get(self.window_id).unwrap().find_requests().len()
        }

        pub fn handle(&mut self, event: Event) -> bool {
            self.findbar.handle(&event, &mut self.windows)
        }
    }

    /// Helper to create an 80x1 findbar attached to a recording window
    pub fn fixture() -> Fixture {
        let icons = IconAtlas::new();
        let mut windows = WindowRegistry::new();
        let window_id = windows.insert(RecordingWindow::default());
        let mut findbar = Findbar::new(80, 1, &icons);
        findbar.attach(window_id);

        Fixture {
            findbar,
            windows,
            window_id,
            icons,
        }
    }

    /// Helper to create a visible findbar with `text` typed into the input
    pub fn fixture_with_query(text: &str) -> Fixture {
        let mut fx = fixture();
        fx.findbar.show();
        fx.findbar.input_mut().set_text(text);
        fx
    }

    /// Helper to create App with default config for tests
    pub fn test_app(text: &str) -> App {
        App::new("test", text, &Config::default(), &IconAtlas::new())
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Helper to create a key release event
    pub fn key_release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind_and_state(
            code,
            KeyModifiers::empty(),
            KeyEventKind::Release,
            KeyEventState::empty(),
        )
    }

    pub fn key_event(code: KeyCode) -> Event {
        Event::Key(key(code))
    }

    pub fn type_text(fx: &mut Fixture, text: &str) {
        for c in text.chars() {
            fx.handle(key_event(KeyCode::Char(c)));
        }
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    pub fn click(column: u16, row: u16) -> Event {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }
}
