use crate::foundation::error::{CropgenError, CropgenResult};

/// Full frame resolution in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    /// Frame width in pixels (> 0).
    pub width: u32,
    /// Frame height in pixels (> 0).
    pub height: u32,
}

impl Resolution {
    /// Build a resolution, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> CropgenResult<Self> {
        let res = Self { width, height };
        res.validate()?;
        Ok(res)
    }

    /// Check that both dimensions are non-zero.
    pub fn validate(self) -> CropgenResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CropgenError::validation(format!(
                "resolution must be > 0 in both dimensions (got {}x{})",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Dimension along `axis`.
    pub fn along(self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// Raster axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
