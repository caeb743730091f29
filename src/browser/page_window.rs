use memchr::memmem;

use super::browser_window::BrowserWindow;

/// A match position in the page (byte offsets within one line)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMatch {
    /// Line number (0-indexed)
    pub line: usize,
    /// Byte offset of the match within the line
    pub start: usize,
    /// Length of the match in bytes
    pub len: usize,
}

/// Result of the last find request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    Found(TextMatch),
    /// Nothing after the previous match; found again from the top
    Wrapped(TextMatch),
    NotFound,
}

impl FindOutcome {
    pub fn text_match(&self) -> Option<TextMatch> {
        match self {
            FindOutcome::Found(m) | FindOutcome::Wrapped(m) => Some(*m),
            FindOutcome::NotFound => None,
        }
    }
}

#[derive(Debug, Default)]
struct FindState {
    phrase: String,
    case_sensitive: bool,
    current: Option<TextMatch>,
}

/// A page of text displayed in a window, with find and focus state
pub struct PageWindow {
    title: String,
    lines: Vec<String>,
    scroll: usize,
    viewport_height: usize,
    content_focused: bool,
    find: FindState,
    last_outcome: Option<FindOutcome>,
}

impl PageWindow {
    pub fn new(title: impl Into<String>, text: &str) -> Self {
        Self {
            title: title.into(),
            lines: text.lines().map(String::from).collect(),
            scroll: 0,
            viewport_height: 1,
            content_focused: true,
            find: FindState::default(),
            last_outcome: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn is_content_focused(&self) -> bool {
        self.content_focused
    }

    pub fn set_content_focused(&mut self, focused: bool) {
        self.content_focused = focused;
    }

    pub fn current_match(&self) -> Option<TextMatch> {
        self.find.current
    }

    pub fn last_outcome(&self) -> Option<FindOutcome> {
        self.last_outcome
    }

    /// Phrase of the active search, empty when none
    pub fn find_phrase(&self) -> &str {
        &self.find.phrase
    }

    /// Updates the number of visible lines and re-clamps the scroll offset
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height.max(1);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport_height)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Scrolls the minimum amount that brings `line` into the viewport
    fn scroll_to_line(&mut self, line: usize) {
        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + self.viewport_height {
            self.scroll = (line + 1 - self.viewport_height).min(self.max_scroll());
        }
    }

    fn search_from(&self, line: usize, col: usize) -> Option<TextMatch> {
        let phrase = &self.find.phrase;
        for (idx, text) in self.lines.iter().enumerate().skip(line) {
            let from = if idx == line { col } else { 0 };
            if let Some(start) = find_in_line(text, phrase, from, self.find.case_sensitive) {
                return Some(TextMatch {
                    line: idx,
                    start,
                    len: phrase.len(),
                });
            }
        }
        None
    }

    /// Position just past the first character of the current match
    fn resume_position(&self) -> (usize, usize) {
        match self.find.current {
            Some(m) => {
                let step = self.lines[m.line]
                    .get(m.start..)
                    .and_then(|rest| rest.chars().next())
                    .map_or(1, char::len_utf8);
                (m.line, m.start + step)
            }
            None => (0, 0),
        }
    }
}

/// Byte offset of `phrase` in `line` at or after `from`
///
/// Case-insensitive matching folds ASCII letters only, so byte offsets
/// stay valid for the original line.
fn find_in_line(line: &str, phrase: &str, from: usize, case_sensitive: bool) -> Option<usize> {
    let haystack = line.get(from..)?;
    let offset = if case_sensitive {
        memmem::find(haystack.as_bytes(), phrase.as_bytes())
    } else {
        memmem::find(
            haystack.to_ascii_lowercase().as_bytes(),
            phrase.to_ascii_lowercase().as_bytes(),
        )
    };
    offset.map(|offset| from + offset)
}

impl BrowserWindow for PageWindow {
    fn find_text(&mut self, phrase: &str, case_sensitive: bool) {
        if phrase.is_empty() {
            self.reset_find_state();
            return;
        }

        // A new phrase or case mode starts over from the top
        if self.find.phrase != phrase || self.find.case_sensitive != case_sensitive {
            self.find = FindState {
                phrase: phrase.to_string(),
                case_sensitive,
                current: None,
            };
        }

        let start = self.resume_position();
        let outcome = match self.search_from(start.0, start.1) {
            Some(m) => FindOutcome::Found(m),
            None if start != (0, 0) => match self.search_from(0, 0) {
                Some(m) => FindOutcome::Wrapped(m),
                None => FindOutcome::NotFound,
            },
            None => FindOutcome::NotFound,
        };

        #[cfg(debug_assertions)]
        log::debug!(
            "Page '{}': find '{}' (case_sensitive={}) -> {:?}",
            self.title,
            phrase,
            case_sensitive,
            outcome
        );

        self.find.current = outcome.text_match();
        if let Some(m) = self.find.current {
            self.scroll_to_line(m.line);
        }
        self.last_outcome = Some(outcome);
    }

    fn reset_find_state(&mut self) {
        #[cfg(debug_assertions)]
        log::debug!("Page '{}': find state reset", self.title);

        self.find = FindState::default();
        self.last_outcome = None;
    }

    fn focus_main_content(&mut self) {
        self.content_focused = true;
    }
}
