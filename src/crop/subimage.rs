use crate::{
    foundation::core::Resolution,
    foundation::error::{CropgenError, CropgenResult},
    geometry::region::{FractionRegion, PixelRegion},
    transform::region_to_pixels,
};

/// Smallest crop side, in pixels, that still compares reliably.
pub const MIN_CROP_SIZE: i32 = 8;

/// Default crop side as a share of the subtask side.
pub const CROP_RELATIVE_SIZE: f64 = 0.1;

/// The area of a frame assigned to one subtask, in both coordinate spaces.
#[derive(Clone, Debug, PartialEq)]
pub struct SubImage {
    region: FractionRegion,
    resolution: Resolution,
    pixel_region: PixelRegion,
    width_px: i32,
    height_px: i32,
}

impl SubImage {
    /// Bind a subtask region to the full frame resolution and derive its pixel rectangle.
    ///
    /// Fails if the region is malformed, lies outside `[0, 1]`, or snaps to a pixel rectangle
    /// with a negative extent.
    pub fn new(region: FractionRegion, resolution: Resolution) -> CropgenResult<Self> {
        resolution.validate()?;
        region.validate_unit()?;

        let pixel_region = region_to_pixels(&region, resolution.width, resolution.height);
        let width_px = pixel_region.width();
        let height_px = pixel_region.height();
        if width_px < 0 || height_px < 0 {
            return Err(CropgenError::validation(format!(
                "subtask region {region:?} has inverted bounds at {}x{} (pixel extent {width_px}x{height_px})",
                resolution.width, resolution.height
            )));
        }

        Ok(Self {
            region,
            resolution,
            pixel_region,
            width_px,
            height_px,
        })
    }

    /// Subtask region as assigned, in fractions.
    pub fn region(&self) -> &FractionRegion {
        &self.region
    }

    /// Full frame resolution.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Subtask rectangle in full-frame pixels.
    pub fn pixel_region(&self) -> &PixelRegion {
        &self.pixel_region
    }

    /// Subtask width in pixels.
    pub fn width_px(&self) -> i32 {
        self.width_px
    }

    /// Subtask height in pixels.
    pub fn height_px(&self) -> i32 {
        self.height_px
    }

    /// Crop size scaled to this subtask: a tenth of each side, never below [`MIN_CROP_SIZE`].
    ///
    /// A zero-area subtask still yields `(8, 8)`; samplers report that as
    /// [`CropgenError::SubtaskTooSmall`].
    pub fn default_crop_size(&self) -> (i32, i32) {
        (
            crop_side_length(self.width_px),
            crop_side_length(self.height_px),
        )
    }
}

fn crop_side_length(subtask_side_px: i32) -> i32 {
    let scaled = (CROP_RELATIVE_SIZE * f64::from(subtask_side_px)).floor() as i32;
    scaled.max(MIN_CROP_SIZE)
}

#[cfg(test)]
#[path = "../../tests/unit/crop/subimage.rs"]
mod tests;
