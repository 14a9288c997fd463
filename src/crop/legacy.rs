use rand::Rng;

use crate::{
    crop::model::Crop,
    crop::sampler::CropSampler,
    crop::subimage::SubImage,
    foundation::core::Axis,
    foundation::error::{CropgenError, CropgenResult},
    geometry::region::PixelRegion,
};

/// Pixel-space sampler.
///
/// Picks a crop of a fixed pixel size, keeping one pixel clear of every subtask edge because
/// the renderer's boundary pixels are unreliable for comparison. The resulting crop is in
/// full-frame pixels and its border is derived with [`Crop::from_pixel_region`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegacySampler {
    crop_size: Option<(i32, i32)>,
}

impl LegacySampler {
    /// Sampler using [`SubImage::default_crop_size`].
    pub fn new() -> Self {
        Self { crop_size: None }
    }

    /// Sampler with a fixed crop size in pixels.
    pub fn with_crop_size(width: u32, height: u32) -> CropgenResult<Self> {
        let side = |v: u32, name: &str| -> CropgenResult<i32> {
            match i32::try_from(v) {
                Ok(v) if v > 0 => Ok(v),
                _ => Err(CropgenError::validation(format!(
                    "legacy crop {name} must be within 1..={} (got {v})",
                    i32::MAX
                ))),
            }
        };
        Ok(Self {
            crop_size: Some((side(width, "width")?, side(height, "height")?)),
        })
    }

    /// Crop size used for `subimage`.
    pub fn crop_size_for(&self, subimage: &SubImage) -> (i32, i32) {
        self.crop_size
            .unwrap_or_else(|| subimage.default_crop_size())
    }
}

impl CropSampler for LegacySampler {
    #[tracing::instrument(level = "debug", skip(self, subimage, rng))]
    fn sample<'a, R: Rng + ?Sized>(
        &self,
        subimage: &'a SubImage,
        id: u32,
        rng: &mut R,
    ) -> CropgenResult<Crop<'a>> {
        let (w, h) = self.crop_size_for(subimage);
        let bounds = subimage.pixel_region();

        let (x0, x1) = random_interval(rng, Axis::X, bounds.left, bounds.right, w)?;
        let (y0, y1) = random_interval(rng, Axis::Y, bounds.bottom, bounds.top, h)?;
        tracing::debug!(x0, x1, y0, y1, "legacy crop placed");

        Crop::from_pixel_region(id, PixelRegion::new(x0, y1, x1, y0), subimage)
    }
}

/// Random `[start, start + length]` within `[low + 1, high - 1]`.
fn random_interval<R: Rng + ?Sized>(
    rng: &mut R,
    axis: Axis,
    low: i32,
    high: i32,
    length: i32,
) -> CropgenResult<(i32, i32)> {
    let (low, high, length) = (i64::from(low), i64::from(high), i64::from(length));
    let min_start = low + 1;
    let max_start = high - 1 - length;
    if max_start < min_start {
        return Err(CropgenError::subtask_too_small(
            axis,
            high - low,
            length + 2,
        ));
    }

    let start = rng.random_range(min_start..=max_start);
    // Both ends lie within [low, high], which came from i32.
    Ok((start as i32, (start + length) as i32))
}

#[cfg(test)]
#[path = "../../tests/unit/crop/legacy.rs"]
mod tests;
