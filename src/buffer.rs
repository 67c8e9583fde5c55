//! Pixel buffer shared by region detection and recoloring
//!
//! A flat, row-major RGB or RGBA raster. The channel count is fixed when the
//! buffer is created; every coordinate access is bounds-checked and fails with
//! `OutOfBounds` instead of panicking.
//!
//! Conversions to and from `image` buffers live here so decoded photos can be
//! handed to the core without copying pixel-by-pixel at the call site.

use image::{DynamicImage, RgbImage, RgbaImage};
use crate::color::Color;
use crate::error::{Result, WallTintError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw bytes. `channels` must be 3 (RGB) or 4 (RGBA) and `data` must
    /// hold exactly `width * height * channels` bytes.
    pub fn new(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Result<Self> {
        if channels != 3 && channels != 4 {
            return Err(WallTintError::InvalidChannelCount(channels));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels))
            .ok_or_else(|| {
                WallTintError::InvalidParameter(format!(
                    "Buffer dimensions {}x{}x{} overflow",
                    width, height, channels
                ))
            })?;

        if data.len() != expected {
            return Err(WallTintError::InvalidParameter(format!(
                "Expected {} bytes for {}x{}x{}, got {}",
                expected,
                width,
                height,
                channels,
                data.len()
            )));
        }

        Ok(Self { width, height, channels, data })
    }

    /// Buffer filled with a single color. RGBA buffers get an opaque alpha.
    pub fn filled(width: u32, height: u32, channels: usize, color: Color) -> Result<Self> {
        if channels != 3 && channels != 4 {
            return Err(WallTintError::InvalidChannelCount(channels));
        }

        let pixel: Vec<u8> = if channels == 4 {
            vec![color.r, color.g, color.b, 255]
        } else {
            vec![color.r, color.g, color.b]
        };
        let data = pixel.repeat(width as usize * height as usize);

        Self::new(width, height, channels, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    pub fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(WallTintError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Byte offset of the first channel of pixel (x, y)
    pub fn index(&self, x: u32, y: u32) -> Result<usize> {
        self.check_bounds(x, y)?;
        Ok(self.offset(x, y))
    }

    pub fn get_rgb(&self, x: u32, y: u32) -> Result<Color> {
        let i = self.index(x, y)?;
        Ok(Color::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Overwrite R, G, B of one pixel. Alpha is left as-is.
    pub fn set_rgb(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        let i = self.index(x, y)?;
        self.write_rgb(i, color);
        Ok(())
    }

    /// Alpha of one pixel, `None` for RGB buffers
    pub fn alpha(&self, x: u32, y: u32) -> Result<Option<u8>> {
        let i = self.index(x, y)?;
        Ok(if self.has_alpha() { Some(self.data[i + 3]) } else { None })
    }

    pub(crate) fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels
    }

    /// RGB at a coordinate the caller has already bounds-checked
    pub(crate) fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub(crate) fn write_rgb(&mut self, i: usize, color: Color) {
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
    }

    // ========================================================================
    // IMAGE CRATE ADAPTERS
    // ========================================================================

    pub fn from_rgba_image(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height, channels: 4, data: img.into_raw() }
    }

    pub fn from_rgb_image(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height, channels: 3, data: img.into_raw() }
    }

    /// Keep alpha when the decoded image has it, otherwise store plain RGB
    pub fn from_dynamic(img: DynamicImage) -> Self {
        if img.color().has_alpha() {
            Self::from_rgba_image(img.to_rgba8())
        } else {
            Self::from_rgb_image(img.to_rgb8())
        }
    }

    /// Copy into an RGBA image for display or encoding. RGB buffers become opaque.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let data = if self.has_alpha() {
            self.data.clone()
        } else {
            self.data
                .chunks_exact(3)
                .flat_map(|p| [p[0], p[1], p[2], 255])
                .collect()
        };

        // Length is width * height * 4 by construction
        RgbaImage::from_raw(self.width, self.height, data)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }
}
