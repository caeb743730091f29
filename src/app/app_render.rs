use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::browser::{FindOutcome, TextMatch};
use crate::findbar::findbar_render::{FINDBAR_HEIGHT, render_bar};
use crate::theme;

const PAGE_HINT: &str = " Ctrl+F or / find | arrows scroll | q quit";
const FINDBAR_HINT: &str = " Enter next match | Tab switch control | Esc close";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let findbar_height = if self.findbar.is_visible() {
            FINDBAR_HEIGHT
        } else {
            0
        };

        let [page_area, findbar_area, status_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(findbar_height),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_page(frame, page_area);
        render_bar(&mut self.findbar, frame, findbar_area);
        self.render_status(frame, status_area);
    }

    /// Status line text: config warning, hovered tooltip, find result, or key hints
    pub fn status_message(&self) -> (String, Color) {
        if let Some(warning) = &self.warning {
            return (format!(" {}", warning), theme::status::WARNING);
        }

        if let Some(tooltip) = self.findbar.tooltip() {
            return (format!(" {}", tooltip), theme::status::TOOLTIP);
        }

        if let Some(page) = self.page() {
            match page.last_outcome() {
                Some(FindOutcome::Found(m)) => {
                    return (format!(" Found at line {}", m.line + 1), theme::status::TEXT);
                }
                Some(FindOutcome::Wrapped(m)) => {
                    return (
                        format!(" Search wrapped to top, found at line {}", m.line + 1),
                        theme::status::TEXT,
                    );
                }
                Some(FindOutcome::NotFound) => {
                    return (
                        format!(" Phrase not found: {}", page.find_phrase()),
                        theme::status::NOT_FOUND,
                    );
                }
                None => {}
            }
        }

        let hint = if self.findbar.is_visible() {
            FINDBAR_HINT
        } else {
            PAGE_HINT
        };
        (hint.to_string(), theme::status::TEXT)
    }

    fn render_page(&mut self, frame: &mut Frame, area: Rect) {
        let Some(page) = self.windows.get_mut(self.window_id) else {
            return;
        };

        let border_color = if page.is_content_focused() {
            theme::page::BORDER_FOCUSED
        } else {
            theme::page::BORDER_UNFOCUSED
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", page.title()))
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme::page::BACKGROUND));

        let inner = block.inner(area);
        page.set_viewport_height(inner.height as usize);

        let current = page.current_match();
        let lines: Vec<Line> = page
            .lines()
            .iter()
            .enumerate()
            .skip(page.scroll())
            .take(inner.height as usize)
            .map(|(idx, text)| page_line(text, current.filter(|m| m.line == idx)))
            .collect();

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .style(Style::default().fg(theme::page::TEXT)),
            area,
        );
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let (message, color) = self.status_message();
        frame.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(color).bg(theme::status::BACKGROUND)),
            area,
        );
    }
}

/// A page line with the current match highlighted
fn page_line(text: &str, current: Option<TextMatch>) -> Line<'_> {
    let Some(m) = current else {
        return Line::raw(text);
    };

    let end = m.start + m.len;
    match (text.get(..m.start), text.get(m.start..end), text.get(end..)) {
        (Some(before), Some(matched), Some(after)) => Line::from(vec![
            Span::raw(before),
            Span::styled(
                matched,
                Style::default()
                    .fg(theme::page::CURRENT_MATCH_FG)
                    .bg(theme::page::CURRENT_MATCH_BG),
            ),
            Span::raw(after),
        ]),
        _ => Line::raw(text),
    }
}
