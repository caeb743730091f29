// Configuration type definitions

use serde::Deserialize;

/// Findbar configuration section
///
/// Widths are in terminal cells.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FindbarConfig {
    /// Horizontal inset on both sides of the bar
    pub border: u16,
    /// Space between adjacent controls
    pub gap: u16,
    pub hide_width: u16,
    /// Width of the Next button
    pub button_width: u16,
    /// Width of the case-sensitivity checkbox including its label
    pub toggle_width: u16,
    pub hide_glyph: String,
    /// Initial state of the case-sensitivity checkbox
    pub case_sensitive: bool,
}

impl Default for FindbarConfig {
    fn default() -> Self {
        FindbarConfig {
            border: 1,
            gap: 1,
            hide_width: 3,
            button_width: 8,
            toggle_width: 18,
            hide_glyph: "✕".to_string(),
            case_sensitive: false,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub findbar: FindbarConfig,
}
