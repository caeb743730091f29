use ratatui::layout::Rect;

use super::findbar_layout::{Control, FindbarLayout, LayoutMetrics};
use super::icon::{Icon, IconAtlas};
use super::search_input::SearchInput;
use crate::browser::{BrowserWindow, WindowId, WindowLookup};
use crate::config::FindbarConfig;

/// The find-in-page toolbar
///
/// Starts hidden. `show` and `hide` are the only visibility transitions.
/// The bar keeps the identity of its window, never the window itself:
/// each action resolves the window through the `WindowLookup` it is given.
pub struct Findbar {
    bounds: Rect,
    metrics: LayoutMetrics,
    layout: FindbarLayout,
    visible: bool,
    focus: Option<Control>,
    hovered: Option<Control>,
    input: SearchInput,
    case_sensitive: bool,
    hide_icon: Icon,
    window: Option<WindowId>,
}

impl Findbar {
    pub fn new(width: u16, height: u16, icons: &IconAtlas) -> Self {
        Self::with_config(width, height, &FindbarConfig::default(), icons)
    }

    pub fn with_config(width: u16, height: u16, config: &FindbarConfig, icons: &IconAtlas) -> Self {
        let metrics = LayoutMetrics::from_config(config);
        let bounds = Rect::new(0, 0, width, height);

        Self {
            bounds,
            metrics,
            layout: FindbarLayout::compute(bounds, &metrics),
            visible: false,
            focus: None,
            hovered: None,
            input: SearchInput::new(),
            case_sensitive: config.case_sensitive,
            hide_icon: icons.acquire("hide", &config.hide_glyph),
            window: None,
        }
    }

    /// Associates the bar with the window that owns it
    pub fn attach(&mut self, window: WindowId) {
        self.window = Some(window);
    }

    pub fn window(&self) -> Option<WindowId> {
        self.window
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Control holding keyboard focus inside the bar
    pub fn focus(&self) -> Option<Control> {
        self.focus
    }

    pub fn hovered(&self) -> Option<Control> {
        self.hovered
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        self.hovered.and_then(Control::tooltip)
    }

    pub fn input(&self) -> &SearchInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut SearchInput {
        &mut self.input
    }

    /// Current search phrase
    pub fn query(&self) -> &str {
        self.input.text()
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    pub fn toggle_case_sensitive(&mut self) {
        self.case_sensitive = !self.case_sensitive;
    }

    pub fn hide_icon(&self) -> &Icon {
        &self.hide_icon
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn layout(&self) -> &FindbarLayout {
        &self.layout
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Moves or resizes the bar; only the input changes width
    pub fn set_bounds(&mut self, area: Rect) {
        if area != self.bounds {
            self.bounds = area;
            self.layout = FindbarLayout::compute(area, &self.metrics);
        }
    }

    /// Shows the bar and focuses the input with its text selected
    pub fn show(&mut self) {
        #[cfg(debug_assertions)]
        log::debug!("Findbar: shown (query '{}')", self.query());

        self.visible = true;
        self.focus = Some(Control::Input);
        self.input.select_to_end();
    }

    /// Hides the bar, then asks the window to drop its find state and take focus
    pub fn hide(&mut self, windows: &mut dyn WindowLookup) {
        self.visible = false;
        self.focus = None;
        self.hovered = None;

        match resolve_window(self.window, windows) {
            Some(window) => {
                #[cfg(debug_assertions)]
                log::debug!("Findbar: hidden, resetting find state of {:?}", self.window);

                window.reset_find_state();
                window.focus_main_content();
            }
            None => {
                #[cfg(debug_assertions)]
                log::debug!("Findbar: hidden, no window to notify");
            }
        }
    }

    pub(super) fn set_focus(&mut self, focus: Option<Control>) {
        self.focus = focus;
    }

    pub(super) fn set_hovered(&mut self, hovered: Option<Control>) {
        self.hovered = hovered;
    }
}

/// Looks up the browser window for `window`, if the bar has one and it still exists
pub(super) fn resolve_window<'w>(
    window: Option<WindowId>,
    windows: &'w mut dyn WindowLookup,
) -> Option<&'w mut dyn BrowserWindow> {
    match window {
        Some(id) => windows.browser_window(id),
        None => None,
    }
}
