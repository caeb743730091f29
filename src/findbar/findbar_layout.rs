//! Horizontal layout of the findbar controls
//!
//! Controls are placed left to right: hide button, input, Next button,
//! case toggle. Only the input is flexible; it takes whatever width the
//! fixed controls, gaps and border insets leave over.

use ratatui::layout::{Position, Rect};

use crate::config::FindbarConfig;

/// The child controls of the findbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Hide,
    Input,
    Next,
    CaseToggle,
}

impl Control {
    /// Focus traversal order; the hide button is not reachable with Tab
    pub const TAB_ORDER: [Control; 3] = [Control::Input, Control::Next, Control::CaseToggle];

    pub fn tooltip(self) -> Option<&'static str> {
        match self {
            Control::Hide => Some("Hide"),
            Control::Next => Some("Find next occurrence of the search phrase"),
            Control::Input | Control::CaseToggle => None,
        }
    }
}

/// Fixed widths (in cells) used to lay out the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub border: u16,
    pub gap: u16,
    pub hide_width: u16,
    pub button_width: u16,
    pub toggle_width: u16,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::from_config(&FindbarConfig::default())
    }
}

impl LayoutMetrics {
    pub fn from_config(config: &FindbarConfig) -> Self {
        Self {
            border: config.border,
            gap: config.gap,
            hide_width: config.hide_width,
            button_width: config.button_width,
            toggle_width: config.toggle_width,
        }
    }

    /// Width of the fixed controls plus the gaps between all four controls
    pub fn fixed_width(&self) -> u16 {
        self.hide_width
            .saturating_add(self.button_width)
            .saturating_add(self.toggle_width)
            .saturating_add(self.gap.saturating_mul(3))
    }

    /// Smallest bar width that fits every fixed control
    pub fn min_width(&self) -> u16 {
        self.border
            .saturating_mul(2)
            .saturating_add(self.fixed_width())
    }

    pub fn input_width(&self, width: u16) -> u16 {
        width.saturating_sub(self.min_width())
    }
}

/// Screen rectangles of the findbar controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FindbarLayout {
    pub hide: Rect,
    pub input: Rect,
    pub next: Rect,
    pub case_toggle: Rect,
}

impl FindbarLayout {
    pub fn compute(area: Rect, metrics: &LayoutMetrics) -> Self {
        let mut x = area.x.saturating_add(metrics.border);

        let hide = place(&mut x, area, metrics.hide_width, metrics.gap);
        let input = place(&mut x, area, metrics.input_width(area.width), metrics.gap);
        let next = place(&mut x, area, metrics.button_width, metrics.gap);
        let case_toggle = place(&mut x, area, metrics.toggle_width, 0);

        Self {
            hide,
            input,
            next,
            case_toggle,
        }
    }

    pub fn rect(&self, control: Control) -> Rect {
        match control {
            Control::Hide => self.hide,
            Control::Input => self.input,
            Control::Next => self.next,
            Control::CaseToggle => self.case_toggle,
        }
    }

    /// Returns the control under the given screen position
    pub fn control_at(&self, x: u16, y: u16) -> Option<Control> {
        let position = Position::new(x, y);
        [
            Control::Hide,
            Control::Input,
            Control::Next,
            Control::CaseToggle,
        ]
        .into_iter()
        .find(|control| self.rect(*control).contains(position))
    }
}

/// Places a control at `x`, clipped to `area`, and advances `x` past it
fn place(x: &mut u16, area: Rect, width: u16, gap: u16) -> Rect {
    let rect = Rect {
        x: *x,
        y: area.y,
        width,
        height: area.height,
    }
    .intersection(area);
    *x = x.saturating_add(width).saturating_add(gap);
    rect
}
