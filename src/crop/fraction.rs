use rand::Rng;

use crate::{
    crop::model::Crop,
    crop::sampler::CropSampler,
    crop::subimage::{CROP_RELATIVE_SIZE, MIN_CROP_SIZE, SubImage},
    foundation::core::Axis,
    foundation::error::{CropgenError, CropgenResult},
    foundation::math::{
        HUNDREDTHS, hundredths_ceil, hundredths_floor, hundredths_to_f32, scale_floor_f32,
    },
    geometry::region::{FractionRegion, PixelRegion, PixelSpace},
};

/// Fraction-space sampler, the current default.
///
/// Sizes the crop as a share of the frame (at least 0.1, grown in 0.01 steps until the crop is
/// [`MIN_CROP_SIZE`] pixels wide), places it at 0.01 granularity inside the subtask border, and
/// reports pixel coordinates in the subtask's own buffer rows ([`PixelSpace::Buffer`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FractionSampler;

impl FractionSampler {
    /// Crop size along each axis, in hundredths of the frame.
    ///
    /// Fails with [`CropgenError::SubtaskTooSmall`] when even the whole frame is narrower than
    /// [`MIN_CROP_SIZE`].
    pub fn relative_crop_size(&self, subimage: &SubImage) -> CropgenResult<(u32, u32)> {
        let res = subimage.resolution();
        Ok((
            relative_size_hundredths(Axis::X, res.along(Axis::X))? as u32,
            relative_size_hundredths(Axis::Y, res.along(Axis::Y))? as u32,
        ))
    }
}

impl CropSampler for FractionSampler {
    #[tracing::instrument(level = "debug", skip(self, subimage, rng))]
    fn sample<'a, R: Rng + ?Sized>(
        &self,
        subimage: &'a SubImage,
        id: u32,
        rng: &mut R,
    ) -> CropgenResult<Crop<'a>> {
        let res = subimage.resolution();
        let border = subimage.region();
        let (size_x, size_y) = self.relative_crop_size(subimage)?;

        let (x_lower, x_upper) = (border.left, border.right);
        let (y_lower, y_upper) = border.vertical_bounds();

        let x = pick_span(
            rng,
            Axis::X,
            (x_lower, x_upper),
            size_x,
            subimage.width_px(),
            res.along(Axis::X),
        )?;
        let y = pick_span(
            rng,
            Axis::Y,
            (y_lower, y_upper),
            size_y,
            subimage.height_px(),
            res.along(Axis::Y),
        )?;
        tracing::debug!(
            size_x,
            size_y,
            x_min = x.min,
            x_max = x.max,
            y_min = y.min,
            y_max = y.max,
            "fraction crop placed"
        );

        let x_origin = scale_floor_f32(x_lower, res.width);
        let y_origin = scale_floor_f32(y_upper, res.height);
        let pixel_region = PixelRegion {
            left: scale_floor_f32(x.min, res.width) - x_origin,
            right: scale_floor_f32(x.max, res.width) - x_origin,
            top: y_origin - scale_floor_f32(y.max, res.height),
            bottom: y_origin - scale_floor_f32(y.min, res.height),
        };
        let crop_region = FractionRegion {
            left: x.min,
            top: y.min,
            right: x.max,
            bottom: y.max,
        };

        Ok(Crop::from_parts(id, subimage, pixel_region, PixelSpace::Buffer, crop_region))
    }
}

#[derive(Clone, Copy, Debug)]
struct Span {
    min: f32,
    max: f32,
}

/// Smallest share of `dim`, in hundredths starting at [`CROP_RELATIVE_SIZE`], that covers
/// [`MIN_CROP_SIZE`] pixels. Bounded at the whole frame.
fn relative_size_hundredths(axis: Axis, dim: u32) -> CropgenResult<i64> {
    let min_px_hundredths = i64::from(MIN_CROP_SIZE) * HUNDREDTHS;
    let mut size = (CROP_RELATIVE_SIZE * HUNDREDTHS as f64).round() as i64;
    while size * i64::from(dim) < min_px_hundredths {
        if size >= HUNDREDTHS {
            return Err(CropgenError::subtask_too_small(
                axis,
                i64::from(dim),
                i64::from(MIN_CROP_SIZE),
            ));
        }
        size += 1;
    }
    Ok(size)
}

/// Uniform `[min, min + size]` (hundredths) inside `[lower, upper]`.
fn pick_span<R: Rng + ?Sized>(
    rng: &mut R,
    axis: Axis,
    (lower, upper): (f32, f32),
    size: u32,
    extent_px: i32,
    dim: u32,
) -> CropgenResult<Span> {
    let size = i64::from(size);
    let first = hundredths_ceil(lower);
    let last = hundredths_floor(upper) - size;
    if last < first {
        let required_px = (size * i64::from(dim) + HUNDREDTHS - 1) / HUNDREDTHS;
        return Err(CropgenError::subtask_too_small(
            axis,
            i64::from(extent_px),
            required_px,
        ));
    }

    let min = rng.random_range(first..=last);
    Ok(Span {
        min: hundredths_to_f32(min),
        max: hundredths_to_f32(min + size),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/crop/fraction.rs"]
mod tests;
