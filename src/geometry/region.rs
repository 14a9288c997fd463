use crate::foundation::error::{CropgenError, CropgenResult};

/// Normalized rectangle in the renderer's border convention.
///
/// Values are single precision and usually lie in `[0, 1]`. The vertical axis is bottom-origin,
/// as accepted by the renderer's region-render parameter. The pixel transform maps `bottom` to
/// [`PixelRegion::top`] and `top` to [`PixelRegion::bottom`]; see
/// [`crate::transform::region_to_pixels`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FractionRegion {
    /// Left edge fraction.
    pub left: f32,
    /// Vertical fraction that becomes the pixel region's `bottom`.
    pub top: f32,
    /// Right edge fraction.
    pub right: f32,
    /// Vertical fraction that becomes the pixel region's `top`.
    pub bottom: f32,
}

impl FractionRegion {
    /// Build a region, rejecting non-finite values and `right < left`.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> CropgenResult<Self> {
        let r = Self {
            left,
            top,
            right,
            bottom,
        };
        r.validate()?;
        Ok(r)
    }

    /// Check finiteness and horizontal ordering.
    pub fn validate(&self) -> CropgenResult<()> {
        for (name, value) in self.fields() {
            if !value.is_finite() {
                return Err(CropgenError::validation(format!(
                    "fraction region {name} must be finite (got {value})"
                )));
            }
        }
        if self.right < self.left {
            return Err(CropgenError::validation(format!(
                "fraction region right ({}) must be >= left ({})",
                self.right, self.left
            )));
        }
        Ok(())
    }

    /// Like [`FractionRegion::validate`], and additionally require every value in `[0, 1]`.
    pub fn validate_unit(&self) -> CropgenResult<()> {
        self.validate()?;
        for (name, value) in self.fields() {
            if !(0.0..=1.0).contains(&value) {
                return Err(CropgenError::validation(format!(
                    "fraction region {name} must be within [0, 1] (got {value})"
                )));
            }
        }
        Ok(())
    }

    /// Lower and upper vertical fractions, whichever field holds them.
    pub fn vertical_bounds(&self) -> (f32, f32) {
        (self.top.min(self.bottom), self.top.max(self.bottom))
    }

    fn fields(&self) -> [(&'static str, f32); 4] {
        [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ]
    }
}

/// Row convention of a [`PixelRegion`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelSpace {
    /// Frame coordinates as produced by [`crate::transform::region_to_pixels`]: rows grow with
    /// the bottom-origin border, so `height = top - bottom`.
    Frame,
    /// Rows of the subtask's own buffer, counted down from its first row:
    /// `height = bottom - top`, and `(left, top)` is the offset inside the buffer.
    Buffer,
}

/// Integer raster rectangle.
///
/// [`PixelRegion::width`], [`PixelRegion::height`] and [`PixelRegion::validate`] use the
/// [`PixelSpace::Frame`] convention. Regions in buffer rows go through
/// [`PixelRegion::extent_in`] and [`PixelRegion::validate_in`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelRegion {
    /// Left pixel edge.
    pub left: i32,
    /// Top pixel edge.
    pub top: i32,
    /// Right pixel edge.
    pub right: i32,
    /// Bottom pixel edge.
    pub bottom: i32,
}

impl PixelRegion {
    /// Build a region from its four edges. No ordering is enforced; see [`PixelRegion::validate`].
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// `right - left`.
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// `top - bottom`.
    pub fn height(&self) -> i32 {
        self.top - self.bottom
    }

    /// `(width, height)` under `space`.
    pub fn extent_in(&self, space: PixelSpace) -> (i32, i32) {
        match space {
            PixelSpace::Frame => (self.width(), self.height()),
            PixelSpace::Buffer => (self.width(), self.bottom - self.top),
        }
    }

    /// Require both extents to be non-negative in frame coordinates.
    pub fn validate(&self) -> CropgenResult<()> {
        self.validate_in(PixelSpace::Frame)
    }

    /// Require both extents to be non-negative under `space`.
    pub fn validate_in(&self, space: PixelSpace) -> CropgenResult<()> {
        let (w, h) = self.extent_in(space);
        if w < 0 || h < 0 {
            return Err(CropgenError::validation(format!(
                "pixel region has negative extent ({w}x{h}) in {space:?} space: {self:?}"
            )));
        }
        Ok(())
    }

    /// Whether `other` lies within `self` (edges inclusive).
    pub fn contains(&self, other: &PixelRegion) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.bottom >= self.bottom
            && other.top <= self.top
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/region.rs"]
mod tests;
