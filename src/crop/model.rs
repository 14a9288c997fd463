use crate::{
    crop::subimage::SubImage,
    foundation::error::CropgenResult,
    geometry::region::{FractionRegion, PixelRegion, PixelSpace},
    transform::{pixels_to_region, region_to_pixels},
};

/// A small rectangle of a subtask, re-rendered independently to check the worker's output.
///
/// A crop borrows the [`SubImage`] it was sampled from and cannot outlive it. Its pixel region
/// is tagged with the [`PixelSpace`] it was computed in: the constructors below produce frame
/// coordinates, while [`crate::FractionSampler`] produces buffer rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Crop<'a> {
    id: u32,
    subimage: &'a SubImage,
    pixel_region: PixelRegion,
    pixel_space: PixelSpace,
    crop_region: FractionRegion,
}

impl<'a> Crop<'a> {
    /// Build a crop from a fraction region.
    ///
    /// The pixel region is derived against the subimage's own pixel size, so it is relative to
    /// the subtask's buffer. Fails if the derived region has a negative extent, as for a
    /// vertically inverted border.
    pub fn from_region(
        id: u32,
        crop_region: FractionRegion,
        subimage: &'a SubImage,
    ) -> CropgenResult<Self> {
        crop_region.validate()?;
        let pixel_region = region_to_pixels(
            &crop_region,
            non_negative_dim(subimage.width_px()),
            non_negative_dim(subimage.height_px()),
        );
        pixel_region.validate()?;
        Ok(Self::from_parts(id, subimage, pixel_region, PixelSpace::Frame, crop_region))
    }

    /// Build a crop from a pixel region expressed in full-frame coordinates.
    ///
    /// The fraction region is derived against the full frame resolution, so it can be passed
    /// to the renderer as-is.
    pub fn from_pixel_region(
        id: u32,
        pixel_region: PixelRegion,
        subimage: &'a SubImage,
    ) -> CropgenResult<Self> {
        pixel_region.validate()?;
        let res = subimage.resolution();
        let crop_region = pixels_to_region(&pixel_region, res.width, res.height);
        Ok(Self::from_parts(id, subimage, pixel_region, PixelSpace::Frame, crop_region))
    }

    /// Both regions already computed; nothing is re-derived.
    pub(crate) fn from_parts(
        id: u32,
        subimage: &'a SubImage,
        pixel_region: PixelRegion,
        pixel_space: PixelSpace,
        crop_region: FractionRegion,
    ) -> Self {
        Self {
            id,
            subimage,
            pixel_region,
            pixel_space,
            crop_region,
        }
    }

    /// Caller-assigned identifier, unique within one verification session.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Crop rectangle in pixels, for the image comparator.
    pub fn pixel_region(&self) -> &PixelRegion {
        &self.pixel_region
    }

    /// Row convention of [`Crop::pixel_region`].
    pub fn pixel_space(&self) -> PixelSpace {
        self.pixel_space
    }

    /// `(width, height)` of the crop in pixels.
    pub fn size_px(&self) -> (i32, i32) {
        self.pixel_region.extent_in(self.pixel_space)
    }

    /// Crop rectangle in fractions, for the renderer's border parameter.
    pub fn crop_region(&self) -> &FractionRegion {
        &self.crop_region
    }

    /// Top-left corner of the crop inside the subtask's rendered buffer.
    ///
    /// Frame-space crops measure down from the subimage's top row; buffer-space crops already
    /// hold the offset.
    pub fn relative_top_left(&self) -> (i32, i32) {
        match self.pixel_space {
            PixelSpace::Frame => {
                let y = self.subimage.pixel_region().top - self.pixel_region.top;
                (self.pixel_region.left, y)
            }
            PixelSpace::Buffer => (self.pixel_region.left, self.pixel_region.top),
        }
    }

    /// Owned snapshot for handing the crop to other layers.
    pub fn describe(&self) -> CropDescriptor {
        let (x, y) = self.relative_top_left();
        CropDescriptor {
            id: self.id,
            crop_region: self.crop_region,
            pixel_region: self.pixel_region,
            pixel_space: self.pixel_space,
            relative_top_left: [x, y],
        }
    }
}

/// Serializable, subimage-free view of a [`Crop`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropDescriptor {
    /// Crop identifier.
    pub id: u32,
    /// Border to re-render.
    pub crop_region: FractionRegion,
    /// Pixels to compare.
    pub pixel_region: PixelRegion,
    /// Row convention of `pixel_region`.
    pub pixel_space: PixelSpace,
    /// `[x, y]` offset of the crop inside the subtask buffer.
    pub relative_top_left: [i32; 2],
}

// SubImage guarantees non-negative extents.
fn non_negative_dim(px: i32) -> u32 {
    u32::try_from(px).unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/crop/model.rs"]
mod tests;
