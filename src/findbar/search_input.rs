//! Single-line search phrase input
//!
//! Wraps a `TextArea` with a key filter that runs before text editing:
//! a plain Escape is reported as unhandled so the enclosing findbar can
//! act on it, and Enter is turned into an activation instead of a newline.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::theme;

/// What the input did with a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResponse {
    /// Not used by the input; the parent may handle it
    Unhandled,
    /// Consumed by text editing
    Handled,
    /// The input's activation notification, with the key that caused it
    Activated { trigger: KeyCode },
}

/// True for an Escape press with no Shift, Ctrl, Alt, Meta or Super held
pub(crate) fn is_plain_escape(key: &KeyEvent) -> bool {
    let held = KeyModifiers::SHIFT
        | KeyModifiers::CONTROL
        | KeyModifiers::ALT
        | KeyModifiers::META
        | KeyModifiers::SUPER;

    key.code == KeyCode::Esc && key.kind == KeyEventKind::Press && !key.modifiers.intersects(held)
}

fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea.set_placeholder_text("Find in page");
    textarea.set_placeholder_style(Style::default().fg(theme::findbar::INPUT_PLACEHOLDER));
    textarea
}

pub struct SearchInput {
    textarea: TextArea<'static>,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchInput {
    pub fn new() -> Self {
        Self {
            textarea: create_search_textarea(),
        }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines().first().map_or("", String::as_str)
    }

    /// Replaces the text; line breaks are dropped
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        self.textarea.insert_str(single_line(text));
    }

    pub fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }

    /// Cursor column in characters
    pub fn cursor_position(&self) -> usize {
        self.textarea.cursor().1
    }

    /// Selected column range, if any
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.textarea
            .selection_range()
            .map(|((_, start), (_, end))| (start, end))
    }

    /// Selects the whole text with the cursor left at its end
    pub fn select_to_end(&mut self) {
        self.textarea.cancel_selection();
        self.textarea.move_cursor(CursorMove::Head);
        if !self.text().is_empty() {
            self.textarea.start_selection();
        }
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputResponse {
        if is_plain_escape(&key) {
            return InputResponse::Unhandled;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => {
                return InputResponse::Activated {
                    trigger: KeyCode::Enter,
                };
            }
            // Terminals report Ctrl+M as Enter on some platforms and as Ctrl+M on others
            KeyCode::Char('m') if ctrl => {
                return InputResponse::Activated {
                    trigger: KeyCode::Enter,
                };
            }
            KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete => {}
            KeyCode::Left | KeyCode::Right | KeyCode::Home | KeyCode::End => {
                // Plain navigation leaves the selection made by select_to_end
                if !key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.textarea.cancel_selection();
                }
            }
            _ => return InputResponse::Unhandled,
        }

        self.textarea.input(key);
        self.collapse_lines();
        InputResponse::Handled
    }

    /// Inserts pasted text; line breaks are dropped
    pub fn paste(&mut self, text: &str) -> InputResponse {
        self.textarea.insert_str(single_line(text));
        InputResponse::Handled
    }

    /// Focus left the input; it reports this as an activation too
    pub fn blur(&mut self, trigger: KeyCode) -> InputResponse {
        self.textarea.cancel_selection();
        InputResponse::Activated { trigger }
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    /// Editor shortcuts may still split the line; join it back
    fn collapse_lines(&mut self) {
        if self.textarea.lines().len() > 1 {
            let joined = self.textarea.lines().concat();
            self.set_text(&joined);
        }
    }
}

fn single_line(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}
