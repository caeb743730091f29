//! Findbar event handling
//!
//! Handles events delivered to the findbar while it is visible:
//! - Plain Escape hides the bar before any child sees it
//! - Tab/Shift+Tab move focus between the input, Next and the checkbox
//! - Keys go to the focused control, then Enter falls back to Next
//! - Mouse clicks and hover over the controls

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

#[cfg(debug_assertions)]
use log::debug;

use super::findbar_layout::Control;
use super::findbar_state::{Findbar, resolve_window};
use super::search_input::{InputResponse, is_plain_escape};
use crate::browser::WindowLookup;

impl Findbar {
    /// Handle an event; returns true if the findbar consumed it
    pub fn handle(&mut self, event: &Event, windows: &mut dyn WindowLookup) -> bool {
        if !self.is_visible() {
            return false;
        }

        match event {
            Event::Key(key) => self.handle_key(*key, windows),
            Event::Mouse(mouse) => self.handle_mouse(*mouse, windows),
            Event::Paste(text) if self.focus() == Some(Control::Input) => {
                self.input_mut().paste(text);
                true
            }
            _ => false,
        }
    }

    /// Drops keyboard focus without hiding the bar
    pub fn blur(&mut self, windows: &mut dyn WindowLookup) {
        self.move_focus(None, KeyCode::Null, windows);
    }

    fn handle_key(&mut self, key: KeyEvent, windows: &mut dyn WindowLookup) -> bool {
        if is_plain_escape(&key) {
            #[cfg(debug_assertions)]
            debug!("Findbar: Escape caught, hiding");

            self.hide(windows);
            return true;
        }

        if key.kind == KeyEventKind::Release {
            return false;
        }

        if let Some(focused) = self.focus() {
            match key.code {
                KeyCode::Tab => {
                    self.cycle_focus(true, windows);
                    return true;
                }
                KeyCode::BackTab => {
                    self.cycle_focus(false, windows);
                    return true;
                }
                _ => {}
            }

            if self.handle_focused_key(focused, key, windows) {
                return true;
            }
        }

        // Enter is a shortcut for the Next button, even without child focus
        if key.code == KeyCode::Enter {
            on_search(self, windows);
            return true;
        }

        false
    }

    fn handle_focused_key(
        &mut self,
        focused: Control,
        key: KeyEvent,
        windows: &mut dyn WindowLookup,
    ) -> bool {
        match focused {
            Control::Input => match self.input_mut().handle_key(key) {
                InputResponse::Unhandled => false,
                InputResponse::Handled => true,
                InputResponse::Activated { trigger } => {
                    on_enter(self, trigger, windows);
                    true
                }
            },
            Control::Next if key.code == KeyCode::Char(' ') => {
                on_search(self, windows);
                true
            }
            Control::CaseToggle if key.code == KeyCode::Char(' ') => {
                self.toggle_case_sensitive();
                true
            }
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, windows: &mut dyn WindowLookup) -> bool {
        let inside = self
            .bounds()
            .contains(Position::new(mouse.column, mouse.row));
        let control = self.layout().control_at(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved => self.set_hovered(control),
            MouseEventKind::Down(MouseButton::Left) => match control {
                Some(Control::Hide) => on_hide_button(self, windows),
                Some(Control::Input) => self.move_focus(Some(Control::Input), KeyCode::Null, windows),
                Some(Control::Next) => {
                    self.move_focus(Some(Control::Next), KeyCode::Null, windows);
                    on_search(self, windows);
                }
                Some(Control::CaseToggle) => {
                    self.move_focus(Some(Control::CaseToggle), KeyCode::Null, windows);
                    self.toggle_case_sensitive();
                }
                None => {}
            },
            _ => {}
        }

        inside
    }

    fn cycle_focus(&mut self, forward: bool, windows: &mut dyn WindowLookup) {
        let order = Control::TAB_ORDER;
        let len = order.len();
        let current = self
            .focus()
            .and_then(|focused| order.iter().position(|c| *c == focused))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        let trigger = if forward { KeyCode::Tab } else { KeyCode::BackTab };

        self.move_focus(Some(order[next]), trigger, windows);
    }

    /// Moves focus; leaving the input fires its activation with `trigger`
    fn move_focus(&mut self, target: Option<Control>, trigger: KeyCode, windows: &mut dyn WindowLookup) {
        let previous = self.focus();
        if previous == target {
            return;
        }

        self.set_focus(target);

        if previous == Some(Control::Input)
            && let InputResponse::Activated { trigger } = self.input_mut().blur(trigger)
        {
            on_enter(self, trigger, windows);
        }

        if target == Some(Control::Input) {
            self.input_mut().select_to_end();
        }
    }
}

/// Asks the window to find the next occurrence of the current phrase
///
/// No-op for an empty phrase or when the window cannot be resolved.
pub fn on_search(findbar: &Findbar, windows: &mut dyn WindowLookup) {
    let phrase = findbar.query();
    if phrase.is_empty() {
        #[cfg(debug_assertions)]
        debug!("Findbar: empty phrase, no search");
        return;
    }

    match resolve_window(findbar.window(), windows) {
        Some(window) => {
            #[cfg(debug_assertions)]
            debug!(
                "Findbar: find '{}' (case_sensitive={})",
                phrase,
                findbar.is_case_sensitive()
            );

            window.find_text(phrase, findbar.is_case_sensitive());
        }
        None => {
            #[cfg(debug_assertions)]
            debug!("Findbar: no window to search in");
        }
    }
}

/// Activation of the input; only a real Enter key triggers a search
///
/// The input also activates when it loses focus, with the key that moved
/// focus away as the trigger.
pub fn on_enter(findbar: &Findbar, trigger: KeyCode, windows: &mut dyn WindowLookup) {
    if trigger == KeyCode::Enter {
        on_search(findbar, windows);
    } else {
        #[cfg(debug_assertions)]
        debug!("Findbar: activation by {:?} ignored", trigger);
    }
}

pub fn on_hide_button(findbar: &mut Findbar, windows: &mut dyn WindowLookup) {
    findbar.hide(windows);
}
