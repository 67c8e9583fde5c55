//! Configuration
//!
//! All tunables in one JSON document. Every section is optional; missing
//! fields fall back to the defaults of the individual settings structs.
//!
//! ```json
//! {
//!   "region": { "threshold": 50 },
//!   "shades": { "steps": 10 },
//!   "highlight": { "color": [255, 255, 255, 128], "thickness": 2 },
//!   "palette": ["#F44336", "#2196F3"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::color::Color;
use crate::error::{Result, WallTintError};
use crate::highlight::HighlightSettings;
use crate::paints::{PaintPalette, DEFAULT_PALETTE};
use crate::region::RegionSettings;
use crate::shades::ShadeSettings;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WallTintConfig {
    pub region: RegionSettings,
    pub shades: ShadeSettings,
    pub highlight: HighlightSettings,
    /// Paint base colors as hex strings (default: the nine built-in paints)
    pub palette: Vec<String>,
}

impl Default for WallTintConfig {
    fn default() -> Self {
        Self {
            region: RegionSettings::default(),
            shades: ShadeSettings::default(),
            highlight: HighlightSettings::default(),
            palette: DEFAULT_PALETTE.iter().map(|(_, color)| color.to_hex()).collect(),
        }
    }
}

impl WallTintConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.shades.steps == 0 {
            return Err(WallTintError::InvalidParameter(
                "shades.steps must be at least 1".to_string(),
            ));
        }
        self.paint_palette()?;
        Ok(())
    }

    /// Palette built from the configured hex list. The built-in paints keep their names.
    pub fn paint_palette(&self) -> Result<PaintPalette> {
        let is_default = self
            .palette
            .iter()
            .map(|hex| Color::from_hex(hex).ok())
            .eq(DEFAULT_PALETTE.iter().map(|(_, color)| Some(*color)));

        if is_default {
            Ok(PaintPalette::default())
        } else {
            PaintPalette::from_hex_list(&self.palette)
        }
    }
}
