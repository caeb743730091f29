//! Tests for app-level event routing between the page and the findbar

use super::*;
use crate::browser::{FindOutcome, TextMatch};
use crate::findbar::Control;
use crate::test_utils::test_helpers::{TEST_PAGE, click, key, key_with_mods, test_app};
use ratatui::crossterm::event::{Event, KeyCode, KeyModifiers};

fn press(app: &mut App, code: KeyCode) {
    app.handle_event(Event::Key(key(code)));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn outcome(app: &App) -> Option<FindOutcome> {
    app.page().unwrap().last_outcome()
}

#[test]
fn test_app_initialization() {
    let app = test_app(TEST_PAGE);

    assert!(!app.findbar.is_visible());
    assert_eq!(app.findbar.window(), Some(app.window_id));
    assert!(app.page().unwrap().is_content_focused());
    assert!(!app.should_quit());
}

#[test]
fn test_ctrl_f_opens_findbar_and_unfocuses_page() {
    let mut app = test_app(TEST_PAGE);

    app.handle_event(Event::Key(key_with_mods(
        KeyCode::Char('f'),
        KeyModifiers::CONTROL,
    )));

    assert!(app.findbar.is_visible());
    assert_eq!(app.findbar.focus(), Some(Control::Input));
    assert!(!app.page().unwrap().is_content_focused());
}

#[test]
fn test_slash_opens_findbar() {
    let mut app = test_app(TEST_PAGE);

    press(&mut app, KeyCode::Char('/'));

    assert!(app.findbar.is_visible());
    assert!(app.findbar.query().is_empty());
}

#[test]
fn test_enter_finds_in_page() {
    let mut app = test_app(TEST_PAGE);
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "fox");

    press(&mut app, KeyCode::Enter);

    assert_eq!(
        outcome(&app),
        Some(FindOutcome::Found(TextMatch {
            line: 0,
            start: 16,
            len: 3
        }))
    );
}

#[test]
fn test_repeated_enter_moves_to_next_match() {
    let mut app = test_app(TEST_PAGE);
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "the");

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        outcome(&app),
        Some(FindOutcome::Found(TextMatch {
            line: 1,
            start: 11,
            len: 3
        }))
    );
}

#[test]
fn test_case_toggle_changes_matching() {
    let mut app = test_app(TEST_PAGE);
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "THE");
    app.findbar.set_case_sensitive(true);

    press(&mut app, KeyCode::Enter);

    assert_eq!(outcome(&app), Some(FindOutcome::NotFound));
}

#[test]
fn test_escape_hides_findbar_resets_search_and_refocuses_page() {
    let mut app = test_app(TEST_PAGE);
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "fox");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Esc);

    assert!(!app.findbar.is_visible());
    assert!(app.page().unwrap().is_content_focused());
    assert_eq!(outcome(&app), None);
    assert_eq!(app.page().unwrap().current_match(), None);
    assert!(!app.should_quit());
}

#[test]
fn test_q_quits_from_page() {
    let mut app = test_app(TEST_PAGE);

    press(&mut app, KeyCode::Char('q'));

    assert!(app.should_quit());
}

#[test]
fn test_q_is_typed_into_findbar_input() {
    let mut app = test_app(TEST_PAGE);
    press(&mut app, KeyCode::Char('/'));

    press(&mut app, KeyCode::Char('q'));

    assert!(!app.should_quit());
    assert_eq!(app.findbar.query(), "q");
}

#[test]
fn test_ctrl_c_quits_while_typing() {
    let mut app = test_app(TEST_PAGE);
    press(&mut app, KeyCode::Char('/'));

    app.handle_event(Event::Key(key_with_mods(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));

    assert!(app.should_quit());
    assert!(app.findbar.query().is_empty());
}

#[test]
fn test_click_on_page_moves_focus_to_page() {
    let mut app = test_app(TEST_PAGE);
    app.findbar
        .set_bounds(ratatui::layout::Rect::new(0, 10, 80, 1));
    press(&mut app, KeyCode::Char('/'));

    app.handle_event(click(5, 2));

    assert!(app.findbar.is_visible());
    assert_eq!(app.findbar.focus(), None);
    assert!(app.page().unwrap().is_content_focused());

    // Page keys work again while the bar stays open
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_arrow_keys_scroll_page() {
    let mut app = test_app(TEST_PAGE);
    app.page_mut().unwrap().set_viewport_height(1);

    press(&mut app, KeyCode::Down);
    assert_eq!(app.page().unwrap().scroll(), 1);

    press(&mut app, KeyCode::End);
    assert_eq!(app.page().unwrap().scroll(), 2);

    press(&mut app, KeyCode::Home);
    assert_eq!(app.page().unwrap().scroll(), 0);
}

#[test]
fn test_key_press_clears_warning() {
    let mut app = test_app(TEST_PAGE);
    app.warning = Some("Invalid config".to_string());

    press(&mut app, KeyCode::Down);

    assert!(app.warning.is_none());
}

#[test]
fn test_page_keys_are_ignored_while_findbar_button_has_focus() {
    let mut app = test_app(TEST_PAGE);
    app.page_mut().unwrap().set_viewport_height(1);
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.findbar.focus(), Some(Control::Next));

    press(&mut app, KeyCode::Char('q'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('G'));

    assert!(!app.should_quit());
    assert!(app.findbar.is_visible());
    assert_eq!(app.findbar.focus(), Some(Control::Next));
    assert_eq!(app.page().unwrap().scroll(), 0);
}

#[test]
fn test_slash_on_focused_toggle_keeps_focus() {
    let mut app = test_app(TEST_PAGE);
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.findbar.focus(), Some(Control::CaseToggle));

    press(&mut app, KeyCode::Char('/'));

    assert_eq!(app.findbar.focus(), Some(Control::CaseToggle));
    assert!(app.findbar.query().is_empty());
}

#[test]
fn test_enter_after_page_click_still_finds() {
    let mut app = test_app(TEST_PAGE);
    app.findbar
        .set_bounds(ratatui::layout::Rect::new(0, 10, 80, 1));
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "lazy");
    app.handle_event(click(5, 2));

    press(&mut app, KeyCode::Enter);

    assert_eq!(
        outcome(&app),
        Some(FindOutcome::Found(TextMatch {
            line: 1,
            start: 15,
            len: 4
        }))
    );
}
