use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;

use super::app_state::App;

/// Timeout for event polling
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Lines scrolled per mouse wheel notch
const WHEEL_SCROLL_LINES: usize = 3;

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            let event = event::read()?;
            self.handle_event(event);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = &event {
            self.warning = None;

            // Ctrl+C quits from anywhere, including the findbar input
            if key.kind == KeyEventKind::Press
                && key.code == KeyCode::Char('c')
                && key.modifiers.contains(KeyModifiers::CONTROL)
            {
                self.should_quit = true;
                return;
            }
        }

        // The findbar gets the first chance while it is visible
        if self.findbar.handle(&event, &mut self.windows) {
            return;
        }

        // Keys stay with the findbar while one of its controls has focus
        if matches!(event, Event::Key(_)) && self.findbar.focus().is_some() {
            return;
        }

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_page_key(key),
            Event::Mouse(mouse) => self.handle_page_mouse(mouse),
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('f') if ctrl => self.open_findbar(),
            KeyCode::Char('/') => self.open_findbar(),
            KeyCode::Char('q') => self.should_quit = true,
            code => {
                let Some(page) = self.page_mut() else {
                    return;
                };
                match code {
                    KeyCode::Up | KeyCode::Char('k') => page.scroll_up(1),
                    KeyCode::Down | KeyCode::Char('j') => page.scroll_down(1),
                    KeyCode::PageUp => page.page_up(),
                    KeyCode::PageDown | KeyCode::Char(' ') => page.page_down(),
                    KeyCode::Home | KeyCode::Char('g') => page.scroll_to_top(),
                    KeyCode::End | KeyCode::Char('G') => page.scroll_to_bottom(),
                    _ => {}
                }
            }
        }
    }

    fn handle_page_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                if let Some(page) = self.page_mut() {
                    page.scroll_down(WHEEL_SCROLL_LINES);
                }
            }
            MouseEventKind::ScrollUp => {
                if let Some(page) = self.page_mut() {
                    page.scroll_up(WHEEL_SCROLL_LINES);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                #[cfg(debug_assertions)]
                log::debug!("App: page clicked, focus moves to page");

                self.findbar.blur(&mut self.windows);
                if let Some(page) = self.page_mut() {
                    page.set_content_focused(true);
                }
            }
            _ => {}
        }
    }
}
