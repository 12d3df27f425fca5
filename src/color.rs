use palette::{FromColor, Hsl, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};

/// Non-linear sRGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`, `rrggbb` or the `#rgb` shorthand.
    pub fn from_hex(value: &str) -> Result<Self> {
        let parsed = value
            .trim()
            .parse::<Srgb<u8>>()
            .map_err(|err| SceneError::InvalidColor {
                value: value.to_string(),
                reason: err.to_string(),
            })?;
        Ok(Self::from_srgb_u8([parsed.red, parsed.green, parsed.blue]))
    }

    pub fn from_srgb_u8(c: [u8; 3]) -> Self {
        let s: Srgb = Srgb::new(c[0], c[1], c[2]).into_format();
        Self::rgb(s.red, s.green, s.blue)
    }

    /// CSS-style HSL: hue in degrees, saturation and lightness in `[0, 1]`.
    pub fn from_hsl(hue_degrees: f32, saturation: f32, lightness: f32) -> Self {
        let hsl: Hsl = Hsl::new(hue_degrees, saturation, lightness);
        let rgb: Srgb = Srgb::from_color(hsl);
        Self::rgb(rgb.red, rgb.green, rgb.blue)
    }

    pub fn to_srgb_u8(&self) -> [u8; 3] {
        let s: Srgb<u8> = Srgb::new(self.r, self.g, self.b).into_format();
        [s.red, s.green, s.blue]
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_srgb_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
