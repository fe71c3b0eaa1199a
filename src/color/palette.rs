use serde::{Deserialize, Serialize};

use super::Color;

/// Number of remembered custom colors.
pub const RECENT_COLOR_SLOTS: usize = 8;

/// The fixed swatches offered next to the canvas.
pub const DEFAULT_PALETTE: [Color; 20] = [
    Color::rgb(0, 0, 0),
    Color::rgb(255, 255, 255),
    Color::rgb(255, 0, 0),
    Color::rgb(0, 255, 0),
    Color::rgb(0, 0, 255),
    Color::rgb(255, 255, 0),
    Color::rgb(255, 0, 255),
    Color::rgb(0, 255, 255),
    Color::rgb(128, 128, 128),
    Color::rgb(192, 192, 192),
    Color::rgb(128, 0, 0),
    Color::rgb(0, 128, 0),
    Color::rgb(0, 0, 128),
    Color::rgb(128, 128, 0),
    Color::rgb(128, 0, 128),
    Color::rgb(0, 128, 128),
    Color::rgb(255, 165, 0),
    Color::rgb(255, 192, 203),
    Color::rgb(160, 82, 45),
    Color::rgb(128, 0, 128),
];

pub fn is_palette_color(color: &Color) -> bool {
    DEFAULT_PALETTE.iter().any(|swatch| swatch.equals_loose(color))
}

/// Most-recently-used custom colors, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentColors {
    colors: Vec<Color>,
}

impl Default for RecentColors {
    fn default() -> Self {
        Self {
            colors: vec![Color::WHITE; RECENT_COLOR_SLOTS],
        }
    }
}

impl RecentColors {
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Remembers `color` unless it is a palette swatch or already listed.
    /// Returns true if the list changed.
    pub fn remember(&mut self, color: Color) -> bool {
        if is_palette_color(&color) || self.colors.iter().any(|c| c.equals_loose(&color)) {
            return false;
        }
        self.colors.insert(0, color);
        self.colors.truncate(RECENT_COLOR_SLOTS);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_membership_is_loose() {
        assert!(is_palette_color(&Color::rgba(255, 165, 0, 0.995)));
        assert!(!is_palette_color(&Color::rgba(255, 165, 0, 0.5)));
    }

    #[test]
    fn test_recent_colors_dedup_and_cap() {
        let mut recent = RecentColors::default();
        assert!(!recent.remember(Color::rgb(255, 0, 0)));

        let custom = Color::rgb(12, 34, 56);
        assert!(recent.remember(custom));
        assert!(!recent.remember(Color::rgba(12, 34, 56, 0.999)));
        assert_eq!(recent.colors()[0], custom);
        assert_eq!(recent.colors().len(), RECENT_COLOR_SLOTS);

        for i in 0..10u8 {
            recent.remember(Color::rgb(i, 1, 2));
        }
        assert_eq!(recent.colors().len(), RECENT_COLOR_SLOTS);
        assert_eq!(recent.colors()[0], Color::rgb(9, 1, 2));
        assert!(!recent.colors().contains(&custom));
    }
}
