//! Fraction <-> pixel transforms matching the renderer's border snapping.

use crate::foundation::math::{scale_round_f32, unscale_f32};
use crate::geometry::region::{FractionRegion, PixelRegion};

/// Snap a fraction region to the pixel rectangle the renderer produces for it.
///
/// Mirrors the renderer's buffer setup, `(int)(border.left * (float)width)` with a half-pixel
/// offset, evaluated in single precision:
///
/// ```text
/// left   = floor(f32(left)   * f32(width)  + 0.5)
/// right  = floor(f32(right)  * f32(width)  + 0.5)
/// top    = floor(f32(bottom) * f32(height) + 0.5)
/// bottom = floor(f32(top)    * f32(height) + 0.5)
/// ```
///
/// Borders are bottom-origin while pixel regions are top-origin, hence the vertical swap.
pub fn region_to_pixels(region: &FractionRegion, width: u32, height: u32) -> PixelRegion {
    PixelRegion {
        left: scale_round_f32(region.left, width),
        right: scale_round_f32(region.right, width),
        top: scale_round_f32(region.bottom, height),
        bottom: scale_round_f32(region.top, height),
    }
}

/// Map a pixel rectangle back to a border the renderer accepts.
///
/// Not an exact inverse of [`region_to_pixels`]: the half pixel is added to the integer edge
/// before dividing, so a round trip may drift by up to one pixel's fraction per edge.
pub fn pixels_to_region(pixel: &PixelRegion, width: u32, height: u32) -> FractionRegion {
    FractionRegion {
        left: unscale_f32(pixel.left, width),
        right: unscale_f32(pixel.right, width),
        bottom: unscale_f32(pixel.top, height),
        top: unscale_f32(pixel.bottom, height),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/raster.rs"]
mod tests;
