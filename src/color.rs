//! Device colors and the CIELAB working space
//!
//! `Color` is the 8-bit sRGB triple stored in pixel buffers. `LabColor` is the
//! same color in CIELAB (D65), where straight-line interpolation gives evenly
//! spaced perceived steps. Conversions go through `palette`.
//!
//! Lab values that fall outside the sRGB gamut are clamped channel-wise before
//! rounding; that is the only out-of-gamut policy, nothing here fails.

use palette::{Clamp, FromColor, Lab, Mix, Srgb};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::error::{Result, WallTintError};

// ============================================================================
// DEVICE COLOR
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`, `RRGGBB` or the short `#RGB` form
    pub fn from_hex(hex: &str) -> Result<Self> {
        let rgb: Srgb<u8> = hex.trim().parse().map_err(|e| {
            WallTintError::InvalidParameter(format!("Invalid hex color '{}': {}", hex, e))
        })?;
        Ok(Self::new(rgb.red, rgb.green, rgb.blue))
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Largest per-channel difference to another color
    pub fn max_channel_diff(&self, other: &Color) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

impl FromStr for Color {
    type Err = WallTintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

// ============================================================================
// LAB COLOR
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabColor {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl LabColor {
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }
}

/// Reference white in Lab (L=100, a=0, b=0)
pub const WHITE_LAB: LabColor = LabColor::new(100.0, 0.0, 0.0);

impl From<LabColor> for Lab {
    fn from(lab: LabColor) -> Self {
        Lab::new(lab.l, lab.a, lab.b)
    }
}

impl From<Lab> for LabColor {
    fn from(lab: Lab) -> Self {
        LabColor::new(lab.l, lab.a, lab.b)
    }
}

// ============================================================================
// CONVERSIONS (sRGB <-> LAB, D65)
// ============================================================================

/// Convert an 8-bit sRGB color to Lab
pub fn to_lab(color: Color) -> LabColor {
    let srgb: Srgb<f32> = Srgb::new(color.r, color.g, color.b).into_format();
    let lab: Lab = Lab::from_color(srgb);
    lab.into()
}

/// Convert Lab back to 8-bit sRGB, clamping each channel into gamut before rounding
pub fn to_rgb(lab: LabColor) -> Color {
    let lab: Lab = lab.into();
    let srgb: Srgb<f32> = Srgb::from_color(lab);
    let rgb: Srgb<u8> = srgb.clamp().into_format();
    Color::new(rgb.red, rgb.green, rgb.blue)
}

/// Linear interpolation on L, a and b independently. `t` is clamped to [0, 1].
pub fn interpolate_lab(from: LabColor, to: LabColor, t: f32) -> LabColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let from: Lab = from.into();
    let to: Lab = to.into();
    from.mix(to, t).into()
}

/// Delta E76 (Euclidean distance in Lab)
pub fn delta_e76(lab1: LabColor, lab2: LabColor) -> f32 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

// ============================================================================
// TESTS
// ============================================================================
