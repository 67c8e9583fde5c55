//! Selection highlight for display feedback
//!
//! Draws a translucent stroke around the last detected region on a copy of
//! the buffer. The stroke is display-only; the working buffer never sees it,
//! so painting after highlighting does not bake the outline into the photo.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_hollow_rect_mut, Blend};
use imageproc::rect::Rect;
use serde::{Deserialize, Serialize};
use crate::buffer::PixelBuffer;
use crate::region::Region;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightSettings {
    /// Stroke color as RGBA tuple, alpha-blended over the photo (default: (255, 255, 255, 128))
    pub color: (u8, u8, u8, u8),
    /// Stroke thickness in pixels, growing outward from the region edge (default: 2)
    pub thickness: u32,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            color: (255, 255, 255, 128),
            thickness: 2,
        }
    }
}

/// Copy of `buffer` with `region` outlined
pub fn render_highlight(buffer: &PixelBuffer, region: &Region, settings: &HighlightSettings) -> RgbaImage {
    let mut canvas = Blend(buffer.to_rgba_image());
    let stroke = Rgba([
        settings.color.0,
        settings.color.1,
        settings.color.2,
        settings.color.3,
    ]);

    // Ring i sits i pixels outside the region; rings that leave the image are clipped
    for i in 0..settings.thickness {
        let rect = Rect::at(region.left() as i32 - i as i32, region.top() as i32 - i as i32)
            .of_size(region.width() + 2 * i, region.height() + 2 * i);
        draw_hollow_rect_mut(&mut canvas, rect, stroke);
    }

    canvas.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_outline_drawn_on_copy_only() {
        let buffer = PixelBuffer::filled(8, 8, 4, Color::BLACK).unwrap();
        let before = buffer.clone();
        let region = Region::new(2, 2, 5, 5).unwrap();
        let settings = HighlightSettings { color: (255, 255, 255, 255), thickness: 1 };

        let img = render_highlight(&buffer, &region, &settings);

        assert_eq!(buffer, before);
        assert_eq!(img.get_pixel(2, 2), &Rgba([255, 255, 255, 255]));
        assert_eq!(img.get_pixel(5, 5), &Rgba([255, 255, 255, 255]));
        assert_eq!(img.get_pixel(3, 3), &Rgba([0, 0, 0, 255]));
        assert_eq!(img.get_pixel(1, 1), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_translucent_stroke_blends() {
        let buffer = PixelBuffer::filled(6, 6, 3, Color::BLACK).unwrap();
        let region = Region::new(1, 1, 4, 4).unwrap();

        let img = render_highlight(&buffer, &region, &HighlightSettings::default());

        let edge = img.get_pixel(1, 1);
        assert!(edge[0] > 0 && edge[0] < 255, "Expected a blended stroke, got {:?}", edge);
        assert_eq!(edge[3], 255);
        // Second ring, one pixel further out
        assert!(img.get_pixel(0, 0)[0] > 0);
        assert_eq!(img.get_pixel(2, 2), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_zero_thickness_draws_nothing() {
        let buffer = PixelBuffer::filled(3, 3, 4, Color::BLACK).unwrap();
        let settings = HighlightSettings { thickness: 0, ..HighlightSettings::default() };
        let img = render_highlight(&buffer, &Region::point(1, 1), &settings);
        assert_eq!(img, buffer.to_rgba_image());
    }
}
