//! Site theme: the dark palette used across every section.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Color palette for the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Page background
    pub background: Color,
    /// Card / panel surface
    pub surface: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text (subtitles, footer lines)
    pub text_muted: Color,
    /// Accent for selected controls
    pub accent: Color,
    /// Ring around orbit logo tiles
    pub ring: Color,
    /// Orbit logo tile background
    pub tile: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// The site's dark palette.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Color::rgb(0.047, 0.047, 0.047), // #0C0C0C
            surface: Color::new(1.0, 1.0, 1.0, 0.06),
            text: Color::WHITE,
            text_muted: Color::new(1.0, 1.0, 1.0, 0.65),
            accent: Color::rgb(0.45, 0.62, 1.0),
            ring: Color::WHITE.with_alpha(0.3),
            tile: Color::BLACK.with_alpha(0.4),
        }
    }
}
