use crate::foundation::core::Axis;

/// Convenience result type used across cropgen.
pub type CropgenResult<T> = Result<T, CropgenError>;

/// Top-level error taxonomy used by crop sampling and planning APIs.
#[derive(thiserror::Error, Debug)]
pub enum CropgenError {
    /// No crop of the required size fits inside the subtask along `axis`.
    ///
    /// This is an expected outcome for legitimately tiny subtasks; callers skip or relax
    /// verification instead of treating it as fatal.
    #[error(
        "subtask too small for reliable verification along {axis}: extent {extent_px}px, need {required_px}px"
    )]
    SubtaskTooSmall {
        /// Axis on which the crop does not fit.
        axis: Axis,
        /// Usable extent of the subtask (or frame) along `axis`, in pixels.
        extent_px: i64,
        /// Extent a crop needs along `axis`, margins included, in pixels.
        required_px: i64,
    },

    /// Malformed geometric input or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing options.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CropgenError {
    /// Build a [`CropgenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CropgenError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`CropgenError::SubtaskTooSmall`] value.
    pub fn subtask_too_small(axis: Axis, extent_px: i64, required_px: i64) -> Self {
        Self::SubtaskTooSmall {
            axis,
            extent_px,
            required_px,
        }
    }

    /// Whether this is the recoverable [`CropgenError::SubtaskTooSmall`] condition.
    pub fn is_subtask_too_small(&self) -> bool {
        matches!(self, Self::SubtaskTooSmall { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
