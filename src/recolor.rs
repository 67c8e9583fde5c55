//! Flat recoloring of a detected wall region
//!
//! Every pixel inside the region (inclusive bounds) gets its R, G and B
//! replaced by the chosen shade. Alpha is never touched. No blending and no
//! attempt to keep the wall's shading or texture.

use log::{debug, warn};
use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::{Result, WallTintError};
use crate::region::Region;

/// Paint `region` of `buffer` with `color`.
///
/// Fails with `NoRegionSelected` when no region is given and with
/// `OutOfBounds` when the region does not fit the buffer; in both cases the
/// buffer is left unchanged.
pub fn apply(buffer: &mut PixelBuffer, region: Option<&Region>, color: Color) -> Result<()> {
    let region = match region {
        Some(region) => region,
        None => {
            warn!("Recolor requested before a wall region was selected");
            return Err(WallTintError::NoRegionSelected);
        }
    };

    if !region.fits(buffer) {
        return Err(WallTintError::OutOfBounds {
            x: region.right(),
            y: region.bottom(),
            width: buffer.width(),
            height: buffer.height(),
        });
    }

    for y in region.top()..=region.bottom() {
        for x in region.left()..=region.right() {
            let i = buffer.offset(x, y);
            buffer.write_rgb(i, color);
        }
    }

    debug!("Painted {:?} ({} pixels) with {}", region, region.area(), color);

    Ok(())
}
