//! Image file adapters
//!
//! Decoding and encoding sit outside the detection and recoloring core; these
//! helpers only move photos between disk and `PixelBuffer`.

use std::io::Cursor;
use std::path::Path;
use crate::buffer::PixelBuffer;
use crate::error::Result;

/// Load an image from disk. Images with an alpha channel give an RGBA
/// buffer, everything else plain RGB.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)?;
    Ok(PixelBuffer::from_dynamic(img))
}

/// Save a buffer to disk; the format follows the file extension
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    // Ensure output directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    buffer.to_rgba_image().save(path)?;
    Ok(())
}

/// Encode a buffer as PNG bytes (for preview/transfer without file I/O)
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    buffer
        .to_rgba_image()
        .write_to(&mut bytes, image::ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Decode in-memory image bytes (any format `image` can guess)
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(bytes)?;
    Ok(PixelBuffer::from_dynamic(img))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::error::WallTintError;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_png_roundtrip_in_memory() {
        let mut buffer = PixelBuffer::filled(5, 3, 4, Color::new(12, 200, 99)).unwrap();
        buffer.set_rgb(4, 2, Color::BLACK).unwrap();

        let png = encode_png(&buffer).unwrap();
        assert_eq!(&png[1..4], b"PNG");

        let decoded = decode_image(&png).unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_opaque_png_decodes_as_rgb() {
        let img = RgbImage::from_pixel(4, 2, Rgb([30, 60, 90]));
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();

        let decoded = decode_image(bytes.get_ref()).unwrap();
        assert_eq!(decoded.channels(), 3);
        assert_eq!(decoded.get_rgb(3, 1).unwrap(), Color::new(30, 60, 90));
        assert_eq!(decoded.alpha(0, 0).unwrap(), None);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(decode_image(b"definitely not an image"), Err(WallTintError::Image(_))));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_image(Path::new("/nonexistent/wall.png")),
            Err(WallTintError::Image(_))
        ));
    }
}
