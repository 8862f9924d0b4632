// Theme selection - pure logic, no Tauri imports.
// Each option maps to one fixed palette applied to the window chrome.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Fixed pink palette. There is no colour input behind it.
    Custom,
}

/// Resolved style for a theme, sent to the frontend as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStyle {
    pub theme: Theme,
    pub background: &'static str,
    pub foreground: &'static str,
    pub stylesheet: String,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Custom];

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Custom => "Custom",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Light => "#FFFFFF",
            Self::Dark => "#333333",
            Self::Custom => "#FF69B4",
        }
    }

    pub fn foreground(self) -> &'static str {
        match self {
            Self::Light | Self::Custom => "#000000",
            Self::Dark => "#FFFFFF",
        }
    }

    pub fn style(self) -> ThemeStyle {
        ThemeStyle {
            theme: self,
            background: self.background(),
            foreground: self.foreground(),
            stylesheet: format!(
                ":root {{ --pane-bg: {}; --pane-fg: {}; }}",
                self.background(),
                self.foreground()
            ),
        }
    }
}
