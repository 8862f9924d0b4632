use serde::{Deserialize, Serialize};

use crate::modules::theme::Theme;

/// Compiled-in layout and control settings.
///
/// Nothing here is loaded from or saved to disk; the frontend reads these
/// through `get_settings` so its CSS matches the geometry used for the
/// child webviews.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub pane_width: f64,
    pub pane_height: f64,
    /// Height of the text field + button row at the top of every pane.
    pub pane_header_height: f64,
    pub pane_gap: f64,
    /// Height of the theme/count controls above the scroll list.
    pub controls_height: f64,
    pub min_panes: usize,
    pub max_panes: usize,
    pub initial_panes: usize,
    pub initial_theme: Theme,
    pub start_page: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pane_width: 1920.0,
            pane_height: 1080.0,
            pane_header_height: 72.0,
            pane_gap: 8.0,
            controls_height: 96.0,
            min_panes: 1,
            max_panes: 10,
            initial_panes: 1,
            initial_theme: Theme::Light,
            start_page: "about:blank".to_string(),
        }
    }
}

impl Settings {
    /// Stepper behaviour: anything outside the range snaps to the nearest bound.
    pub fn clamp_pane_count(&self, requested: i64) -> usize {
        let min = self.min_panes as i64;
        let max = self.max_panes as i64;
        requested.clamp(min, max) as usize
    }

    pub fn surface_height(&self) -> f64 {
        (self.pane_height - self.pane_header_height).max(0.0)
    }

    /// Vertical distance between the tops of two consecutive slots.
    pub fn slot_stride(&self) -> f64 {
        self.pane_height + self.pane_gap
    }
}
