//! Wall Region Detection
//!
//! Flood fill from a seed pixel over 4-connected neighbors whose color is
//! close to the seed color (Manhattan distance in RGB below a threshold).
//! The result is the bounding box of every pixel the fill reaches, not a
//! pixel mask: an L-shaped wall yields a box that also covers whatever sits
//! in the notch of the L.
//!
//! The traversal uses an explicit stack and a visited bitmap, so every pixel
//! is tested at most once and the stack never exceeds width * height entries.

use log::debug;
use serde::{Deserialize, Serialize};
use crate::buffer::PixelBuffer;
use crate::error::{Result, WallTintError};

/// Manhattan RGB distance below which a pixel counts as part of the wall
pub const DEFAULT_THRESHOLD: u32 = 50;

// ============================================================================
// SETTINGS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSettings {
    /// Pixels with |dR| + |dG| + |dB| strictly below this join the region (default: 50)
    pub threshold: u32,
}

impl Default for RegionSettings {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD }
    }
}

// ============================================================================
// REGION
// ============================================================================

/// Axis-aligned bounding box with inclusive bounds on all four sides.
///
/// `left <= right` and `top <= bottom` always hold; deserialization goes
/// through `Region::new` so a stored box cannot break that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RegionBounds")]
pub struct Region {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

#[derive(Deserialize)]
struct RegionBounds {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl TryFrom<RegionBounds> for Region {
    type Error = WallTintError;

    fn try_from(bounds: RegionBounds) -> Result<Self> {
        Region::new(bounds.left, bounds.top, bounds.right, bounds.bottom)
    }
}

impl Region {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Result<Self> {
        if left > right || top > bottom {
            return Err(WallTintError::InvalidParameter(format!(
                "Region bounds out of order: left={} top={} right={} bottom={}",
                left, top, right, bottom
            )));
        }
        Ok(Self { left, top, right, bottom })
    }

    /// Single-pixel region
    pub fn point(x: u32, y: u32) -> Self {
        Self { left: x, top: y, right: x, bottom: y }
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn top(&self) -> u32 {
        self.top
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    pub fn bottom(&self) -> u32 {
        self.bottom
    }

    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }

    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    pub fn is_point(&self) -> bool {
        self.left == self.right && self.top == self.bottom
    }

    /// Whether the whole box lies inside the buffer
    pub fn fits(&self, buffer: &PixelBuffer) -> bool {
        buffer.contains(self.right, self.bottom)
    }

    fn include(&mut self, x: u32, y: u32) {
        self.left = self.left.min(x);
        self.top = self.top.min(y);
        self.right = self.right.max(x);
        self.bottom = self.bottom.max(y);
    }
}

// ============================================================================
// DETECTION
// ============================================================================

/// RGB distance (sum of absolute differences)
pub fn color_diff(c1: [u8; 3], c2: [u8; 3]) -> u32 {
    c1[0].abs_diff(c2[0]) as u32 + c1[1].abs_diff(c2[1]) as u32 + c1[2].abs_diff(c2[2]) as u32
}

/// Detect the wall region around `(seed_x, seed_y)`.
///
/// Fails with `OutOfBounds` before reading any pixel if the seed lies outside
/// the buffer. If no pixel (not even the seed, e.g. with a threshold of 0)
/// passes the similarity test, the region is the seed point itself.
pub fn detect(buffer: &PixelBuffer, seed_x: u32, seed_y: u32, threshold: u32) -> Result<Region> {
    buffer.check_bounds(seed_x, seed_y)?;

    let (width, height) = buffer.dimensions();
    let base_color = buffer.rgb_at(seed_x, seed_y);

    let mut region = Region::point(seed_x, seed_y);
    let mut visited = vec![false; width as usize * height as usize];
    let mut stack: Vec<(u32, u32)> = vec![(seed_x, seed_y)];
    visited[seed_y as usize * width as usize + seed_x as usize] = true;

    let mut filled = 0usize;
    let mut peak_stack = 1usize;

    while let Some((x, y)) = stack.pop() {
        if color_diff(buffer.rgb_at(x, y), base_color) >= threshold {
            continue;
        }

        region.include(x, y);
        filled += 1;

        for (nx, ny) in neighbors(x, y, width, height) {
            let idx = ny as usize * width as usize + nx as usize;
            if !visited[idx] {
                visited[idx] = true;
                stack.push((nx, ny));
            }
        }

        peak_stack = peak_stack.max(stack.len());
    }

    debug!(
        "Region from seed ({}, {}) threshold {}: {:?}, {} pixels filled, peak stack {}",
        seed_x, seed_y, threshold, region, filled, peak_stack
    );

    Ok(region)
}

/// Detect using configured settings
pub fn detect_with(buffer: &PixelBuffer, seed_x: u32, seed_y: u32, settings: &RegionSettings) -> Result<Region> {
    detect(buffer, seed_x, seed_y, settings.threshold)
}

/// In-bounds 4-neighbors: left, up, right, down
fn neighbors(x: u32, y: u32, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    let left = (x > 0).then(|| (x - 1, y));
    let up = (y > 0).then(|| (x, y - 1));
    let right = (x + 1 < width).then(|| (x + 1, y));
    let down = (y + 1 < height).then(|| (x, y + 1));
    [left, up, right, down].into_iter().flatten()
}

// ============================================================================
// TESTS
// ============================================================================
