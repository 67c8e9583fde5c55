//! Paint Palette
//!
//! The fixed list of paint base colors offered to the user, plus the preview
//! gradient for each one (the same shade run the shade grid uses).

use serde::Serialize;
use crate::color::Color;
use crate::error::Result;
use crate::shades::{generate, ShadeSequence};

/// Built-in paint colors, in display order
pub const DEFAULT_PALETTE: [(&str, Color); 9] = [
    ("Red", Color::new(0xF4, 0x43, 0x36)),
    ("Orange", Color::new(0xFF, 0x98, 0x00)),
    ("Yellow", Color::new(0xFF, 0xEB, 0x3B)),
    ("Green", Color::new(0x4C, 0xAF, 0x50)),
    ("Blue", Color::new(0x21, 0x96, 0xF3)),
    ("Purple", Color::new(0x9C, 0x27, 0xB0)),
    ("Pink", Color::new(0xE9, 0x1E, 0x63)),
    ("Grey", Color::new(0x60, 0x7D, 0x8B)),
    ("Cyan", Color::new(0x00, 0xBC, 0xD4)),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaintColor {
    pub name: String,
    pub color: Color,
}

/// Preview gradient for one palette entry
#[derive(Debug, Clone, Serialize)]
pub struct Swatch {
    pub name: String,
    pub shades: ShadeSequence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaintPalette {
    colors: Vec<PaintColor>,
}

impl Default for PaintPalette {
    fn default() -> Self {
        let colors = DEFAULT_PALETTE
            .iter()
            .map(|&(name, color)| PaintColor {
                name: name.to_string(),
                color,
            })
            .collect();
        Self { colors }
    }
}

impl PaintPalette {
    /// Build from hex strings; entries are named by their hex value
    pub fn from_hex_list<S: AsRef<str>>(hexes: &[S]) -> Result<Self> {
        let colors = hexes
            .iter()
            .map(|hex| {
                let color = Color::from_hex(hex.as_ref())?;
                Ok(PaintColor { name: color.to_hex(), color })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PaintColor> {
        self.colors.get(index)
    }

    pub fn colors(&self) -> &[PaintColor] {
        &self.colors
    }

    /// Preview gradient (base color to white) for every entry
    pub fn swatches(&self, steps: usize) -> Result<Vec<Swatch>> {
        self.colors
            .iter()
            .map(|paint| {
                Ok(Swatch {
                    name: paint.name.clone(),
                    shades: generate(paint.color, steps)?,
                })
            })
            .collect()
    }
}
