use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Paragraph},
};

use super::findbar_layout::Control;
use super::findbar_state::Findbar;
use crate::theme;

pub const FINDBAR_HEIGHT: u16 = 1;

pub fn render_bar(findbar: &mut Findbar, frame: &mut Frame, area: Rect) {
    findbar.set_bounds(area);
    if !findbar.is_visible() {
        return;
    }

    let layout = *findbar.layout();
    let focus = findbar.focus();
    let hovered = findbar.hovered();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme::findbar::BACKGROUND)),
        area,
    );

    let hide_color = if hovered == Some(Control::Hide) {
        theme::findbar::HIDE_ICON_HOVER
    } else {
        theme::findbar::HIDE_ICON
    };
    frame.render_widget(
        Paragraph::new(findbar.hide_icon().glyph())
            .alignment(Alignment::Center)
            .style(Style::default().fg(hide_color)),
        layout.hide,
    );

    let textarea = findbar.input_mut().textarea_mut();
    textarea.set_style(
        Style::default()
            .fg(theme::findbar::INPUT_TEXT)
            .bg(theme::findbar::INPUT_BG),
    );
    if focus == Some(Control::Input) {
        textarea.set_cursor_style(theme::palette::CURSOR);
    } else {
        textarea.set_cursor_style(Style::default());
    }
    frame.render_widget(&*textarea, layout.input);

    frame.render_widget(
        Paragraph::new("Next")
            .alignment(Alignment::Center)
            .style(control_style(Control::Next, focus, hovered)),
        layout.next,
    );

    let mark = if findbar.is_case_sensitive() { "[x]" } else { "[ ]" };
    frame.render_widget(
        Paragraph::new(format!("{} Case-sensitive", mark))
            .style(control_style(Control::CaseToggle, focus, hovered)),
        layout.case_toggle,
    );
}

fn control_style(control: Control, focus: Option<Control>, hovered: Option<Control>) -> Style {
    if focus == Some(control) {
        theme::findbar::CONTROL_FOCUSED
    } else if hovered == Some(control) {
        theme::findbar::CONTROL_HOVER
    } else {
        theme::findbar::CONTROL
    }
}
