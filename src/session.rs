//! Painting session
//!
//! Holds the photo being painted together with the state that carries over
//! between user actions: the last detected wall region and the shade run of
//! the last chosen paint color. Each user action is one method call.
//!
//! A new wall selection always replaces the previous one; regions are never
//! merged.

use log::{info, warn};
use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::config::WallTintConfig;
use crate::error::{Result, WallTintError};
use crate::highlight::render_highlight;
use crate::paints::PaintPalette;
use crate::recolor;
use crate::region::{self, Region};
use crate::shades::{self, ShadeSequence};
use image::RgbaImage;

#[derive(Debug, Clone)]
pub struct Session {
    buffer: PixelBuffer,
    config: WallTintConfig,
    palette: PaintPalette,
    wall_region: Option<Region>,
    shades: Option<ShadeSequence>,
}

impl Session {
    pub fn new(buffer: PixelBuffer, config: WallTintConfig) -> Result<Self> {
        config.validate()?;
        let palette = config.paint_palette()?;
        Ok(Self {
            buffer,
            config,
            palette,
            wall_region: None,
            shades: None,
        })
    }

    pub fn with_defaults(buffer: PixelBuffer) -> Self {
        Self {
            buffer,
            config: WallTintConfig::default(),
            palette: PaintPalette::default(),
            wall_region: None,
            shades: None,
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    pub fn config(&self) -> &WallTintConfig {
        &self.config
    }

    pub fn palette(&self) -> &PaintPalette {
        &self.palette
    }

    pub fn region(&self) -> Option<&Region> {
        self.wall_region.as_ref()
    }

    pub fn shades(&self) -> Option<&ShadeSequence> {
        self.shades.as_ref()
    }

    /// Detect the wall under a click. On failure the previous selection is kept.
    pub fn select_wall(&mut self, x: u32, y: u32) -> Result<Region> {
        let region = region::detect_with(&self.buffer, x, y, &self.config.region)?;
        info!(
            "Selected wall at ({}, {}): {}x{} box at ({}, {})",
            x,
            y,
            region.width(),
            region.height(),
            region.left(),
            region.top()
        );
        self.wall_region = Some(region);
        Ok(region)
    }

    pub fn clear_selection(&mut self) {
        self.wall_region = None;
    }

    /// Generate the shade run for a paint color
    pub fn choose_base_color(&mut self, color: Color) -> Result<&ShadeSequence> {
        let sequence = shades::generate_with(color, &self.config.shades)?;
        info!("Generated {} shades for {}", sequence.len(), color);
        Ok(self.shades.insert(sequence))
    }

    /// Generate the shade run for a palette entry
    pub fn choose_palette_color(&mut self, index: usize) -> Result<&ShadeSequence> {
        let color = self
            .palette
            .get(index)
            .map(|paint| paint.color)
            .ok_or_else(|| {
                WallTintError::InvalidParameter(format!(
                    "Palette index {} out of range (palette has {} colors)",
                    index,
                    self.palette.len()
                ))
            })?;
        self.choose_base_color(color)
    }

    /// Paint the selected wall with shade `index` of the current shade run
    pub fn apply_shade(&mut self, index: usize) -> Result<Color> {
        if self.wall_region.is_none() {
            warn!("Shade {} picked before selecting a wall", index);
            return Err(WallTintError::NoRegionSelected);
        }

        let shades = self.shades.as_ref().ok_or_else(|| {
            WallTintError::InvalidParameter("No paint color chosen yet".to_string())
        })?;

        let color = shades.get(index).ok_or_else(|| {
            WallTintError::InvalidParameter(format!(
                "Shade index {} out of range ({} shades)",
                index,
                shades.len()
            ))
        })?;

        self.apply_color(color)?;
        Ok(color)
    }

    /// Paint the selected wall with an arbitrary color
    pub fn apply_color(&mut self, color: Color) -> Result<()> {
        recolor::apply(&mut self.buffer, self.wall_region.as_ref(), color)?;
        info!("Painted wall with {}", color);
        Ok(())
    }

    /// Display copy with the current selection outlined, if any
    pub fn preview(&self) -> RgbaImage {
        match &self.wall_region {
            Some(region) => render_highlight(&self.buffer, region, &self.config.highlight),
            None => self.buffer.to_rgba_image(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_walls() -> PixelBuffer {
        // Left half light gray, right half dark blue
        let mut buffer = PixelBuffer::filled(8, 4, 4, Color::new(210, 210, 205)).unwrap();
        for y in 0..4 {
            for x in 4..8 {
                buffer.set_rgb(x, y, Color::new(20, 30, 90)).unwrap();
            }
        }
        buffer
    }

    #[test]
    fn test_apply_before_select_fails() {
        let mut session = Session::with_defaults(two_walls());
        session.choose_base_color(Color::new(244, 67, 54)).unwrap();
        assert!(matches!(session.apply_shade(0), Err(WallTintError::NoRegionSelected)));
        assert!(matches!(session.apply_color(Color::WHITE), Err(WallTintError::NoRegionSelected)));
        assert_eq!(session.buffer(), &two_walls());
    }

    #[test]
    fn test_apply_shade_needs_shades() {
        let mut session = Session::with_defaults(two_walls());
        session.select_wall(0, 0).unwrap();
        assert!(matches!(session.apply_shade(0), Err(WallTintError::InvalidParameter(_))));

        session.choose_palette_color(0).unwrap();
        assert!(matches!(session.apply_shade(10), Err(WallTintError::InvalidParameter(_))));
        assert!(session.choose_palette_color(9).is_err());
    }

    #[test]
    fn test_select_and_paint_left_wall() {
        let mut session = Session::with_defaults(two_walls());
        let region = session.select_wall(1, 2).unwrap();
        assert_eq!(region, Region::new(0, 0, 3, 3).unwrap());

        session.choose_palette_color(4).unwrap();
        let shade = session.apply_shade(3).unwrap();

        assert_eq!(session.buffer().get_rgb(3, 3).unwrap(), shade);
        assert_eq!(session.buffer().get_rgb(4, 0).unwrap(), Color::new(20, 30, 90));
    }

    #[test]
    fn test_new_selection_supersedes_old() {
        let mut session = Session::with_defaults(two_walls());
        session.select_wall(0, 0).unwrap();
        let right = session.select_wall(7, 3).unwrap();
        assert_eq!(session.region(), Some(&right));
        assert_eq!(right, Region::new(4, 0, 7, 3).unwrap());

        // Failed selection keeps the previous one
        assert!(session.select_wall(8, 0).is_err());
        assert_eq!(session.region(), Some(&right));

        session.clear_selection();
        assert!(session.region().is_none());
    }

    #[test]
    fn test_config_threshold_is_used() {
        let config = WallTintConfig::from_json_str(r#"{ "region": { "threshold": 1000 } }"#).unwrap();
        let mut session = Session::new(two_walls(), config).unwrap();
        // Both halves are within 1000 of each other
        assert_eq!(session.select_wall(0, 0).unwrap(), Region::new(0, 0, 7, 3).unwrap());
    }

    #[test]
    fn test_preview_leaves_buffer_alone() {
        let mut session = Session::with_defaults(two_walls());
        assert_eq!(session.preview(), two_walls().to_rgba_image());

        session.select_wall(0, 0).unwrap();
        let preview = session.preview();
        assert_ne!(preview, two_walls().to_rgba_image());
        assert_eq!(session.buffer(), &two_walls());
    }
}
