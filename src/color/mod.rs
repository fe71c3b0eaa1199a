use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, CanvasResult};

mod palette;
pub use palette::{DEFAULT_PALETTE, RECENT_COLOR_SLOTS, RecentColors, is_palette_color};

/// Alpha difference below which two colors still compare loosely equal.
pub const ALPHA_TOLERANCE: f32 = 0.01;

/// An RGB color with a normalized alpha channel.
///
/// The derived `PartialEq` is the exact comparison used by flood fill.
/// Palette bookkeeping uses [`Color::equals_loose`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRecord")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`
    pub a: f32,
}

impl Color {
    /// The color of an empty cell.
    pub const TRANSPARENT: Color = Color::rgba(255, 255, 255, 0.0);
    /// What compositing yields when both inputs are fully transparent.
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0.0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Builds a color from 8-bit RGBA, normalizing alpha to `0.0..=1.0`.
    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a as f32 / 255.0)
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, alpha_to_u8(self.a)]
    }

    /// Returns a copy with alpha clamped into range.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// False for alpha outside `0.0..=1.0` (including NaN).
    pub fn has_valid_alpha(&self) -> bool {
        (0.0..=1.0).contains(&self.a)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    pub fn equals_exact(&self, other: &Color) -> bool {
        self == other
    }

    pub fn equals_loose(&self, other: &Color) -> bool {
        self.r == other.r
            && self.g == other.g
            && self.b == other.b
            && (self.a - other.a).abs() < ALPHA_TOLERANCE
    }

    pub fn to_color32(self) -> Color32 {
        let [r, g, b, a] = self.to_rgba8();
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

}

/// Unchecked wire form; alpha is validated on the way into [`Color`].
#[derive(Deserialize)]
struct ColorRecord {
    r: u8,
    g: u8,
    b: u8,
    a: f32,
}

impl TryFrom<ColorRecord> for Color {
    type Error = CanvasError;

    fn try_from(ColorRecord { r, g, b, a }: ColorRecord) -> CanvasResult<Self> {
        let color = Color::rgba(r, g, b, a);
        if color.has_valid_alpha() {
            Ok(color)
        } else {
            Err(CanvasError::InvalidColor(format!("alpha {} is outside 0..=1", a)))
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

fn alpha_to_u8(a: f32) -> u8 {
    (a.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Composites `foreground` over `background` ("over" operator, straight alpha).
pub fn blend(foreground: Color, background: Color) -> Color {
    let inverse = 1.0 - foreground.a;
    let a = foreground.a + background.a * inverse;
    if a == 0.0 {
        return Color::CLEAR;
    }

    let channel = |fg: u8, bg: u8| -> u8 {
        let value = (fg as f32 * foreground.a + bg as f32 * background.a * inverse) / a;
        value.round().clamp(0.0, 255.0) as u8
    };

    Color {
        r: channel(foreground.r, background.r),
        g: channel(foreground.g, background.g),
        b: channel(foreground.b, background.b),
        a,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_transparent() {
            write!(f, "transparent")
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = CanvasError;

    /// Accepts `transparent`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
    /// `rgba(r, g, b, a)` with `a` in `0.0..=1.0`.
    fn from_str(s: &str) -> CanvasResult<Self> {
        let s = s.trim();
        let invalid = || CanvasError::InvalidColor(s.to_owned());

        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Color::TRANSPARENT);
        }

        if let Some(hex) = s.strip_prefix('#') {
            let byte = |i: usize| {
                hex.get(i..i + 2)
                    .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                    .ok_or_else(invalid)
            };
            return match hex.len() {
                6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
                8 => Ok(Color::from_rgba8([byte(0)?, byte(2)?, byte(4)?, byte(6)?])),
                _ => Err(invalid()),
            };
        }

        let (body, has_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != if has_alpha { 4 } else { 3 } {
            return Err(invalid());
        }

        let channel = |part: &str| part.parse::<u8>().map_err(|_| invalid());
        let a = match parts.get(3) {
            Some(part) => part.parse::<f32>().map_err(|_| invalid())?,
            None => 1.0,
        };
        let color = Color::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, a);
        if !color.has_valid_alpha() {
            return Err(invalid());
        }
        Ok(color)
    }
}
