//! cropgen samples verification crops for distributed rendering.
//!
//! Workers render subtasks, fractional slices of a frame. To check a worker's output the
//! verifier re-renders a few small crops of each subtask and compares them against the returned
//! pixels. This crate decides where those crops go, in both coordinate spaces involved:
//!
//! - **Fraction space** ([`FractionRegion`]): the renderer's border parameter, four `f32`
//!   fractions with a bottom-origin vertical axis.
//! - **Pixel space** ([`PixelRegion`]): integer raster coordinates, snapped exactly the way the
//!   renderer snaps borders (single precision, half-pixel offset).
//!
//! # Pipeline overview
//!
//! 1. **Bind**: `FractionRegion + Resolution -> SubImage` (subtask pixel rectangle)
//! 2. **Sample**: `SubImage -> Crop` via a [`Sampler`] ([`FractionSampler`] or [`LegacySampler`])
//! 3. **Hand off**: [`Crop::crop_region`] to the re-render driver, [`Crop::pixel_region`] and
//!    [`Crop::relative_top_left`] to the image comparator
//!
//! [`plan_crops`] and [`plan_batch`] wrap these steps for a verification session configured by
//! [`VerificationOpts`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO**: apart from [`VerificationOpts::from_path`], everything is pure computation.
//! - **Renderer-exact rounding**: transforms are evaluated in `f32`; see [`transform`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod crop;
mod foundation;
mod geometry;
mod verify;

/// Coordinate transforms between fraction and pixel space.
pub mod transform;

pub use crate::crop::fraction::FractionSampler;
pub use crate::crop::legacy::LegacySampler;
pub use crate::crop::model::{Crop, CropDescriptor};
pub use crate::crop::sampler::{CropSampler, Sampler, SamplerKind};
pub use crate::crop::subimage::{CROP_RELATIVE_SIZE, MIN_CROP_SIZE, SubImage};
pub use crate::foundation::core::{Axis, Resolution};
pub use crate::foundation::error::{CropgenError, CropgenResult};
pub use crate::geometry::region::{FractionRegion, PixelRegion, PixelSpace};
pub use crate::verify::opts::{TooSmallPolicy, VerificationOpts};
pub use crate::verify::plan::{
    CropPlan, PlanSummary, SubtaskSpec, plan_batch, plan_crops, session_rng,
};
