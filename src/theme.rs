//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HOVER: Color = Color::Rgb(45, 45, 72);

    // Semantic colors
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    // Accent colors
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const ORANGE: Color = Color::Rgb(255, 184, 108);

    // Shared cursor style (used by textarea widgets)
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Page view styles
pub mod page {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TEXT: Color = palette::TEXT;

    // Current find match
    pub const CURRENT_MATCH_BG: Color = palette::ORANGE;
    pub const CURRENT_MATCH_FG: Color = palette::BG_DARK;
}

/// Findbar styles
pub mod findbar {
    use super::*;

    pub const BACKGROUND: Color = palette::BG_SURFACE;

    // Hide button glyph
    pub const HIDE_ICON: Color = palette::TEXT_MUTED;
    pub const HIDE_ICON_HOVER: Color = palette::PINK;

    // Search phrase input
    pub const INPUT_BG: Color = palette::BG_DARK;
    pub const INPUT_TEXT: Color = palette::TEXT;
    pub const INPUT_PLACEHOLDER: Color = palette::TEXT_DIM;

    // Next button and case toggle
    pub const CONTROL: Style = Style::new().fg(palette::TEXT).bg(palette::BG_HOVER);
    pub const CONTROL_FOCUSED: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::CYAN)
        .add_modifier(Modifier::BOLD);
    pub const CONTROL_HOVER: Style = Style::new().fg(palette::PINK).bg(palette::BG_HOVER);
}

/// Status line styles
pub mod status {
    use super::*;

    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const TEXT: Color = palette::TEXT_MUTED;
    pub const TOOLTIP: Color = palette::CYAN;
    pub const NOT_FOUND: Color = palette::ERROR;
    pub const WARNING: Color = palette::WARNING;
}
