//! Light/dark theme state and the palette used by the renderer.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-valued presentation theme, persisted across runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light appearance (default).
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns true if this is the dark theme.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Icon shown on the theme toggle hint.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    /// Default text color.
    pub fn fg(self) -> Color {
        match self {
            Self::Light => Color::Black,
            Self::Dark => Color::White,
        }
    }

    /// Border color for the focused panel.
    pub fn accent(self) -> Color {
        match self {
            Self::Light => Color::Blue,
            Self::Dark => Color::Cyan,
        }
    }

    /// Color for completed task rows.
    pub fn done(self) -> Color {
        Color::DarkGray
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}
