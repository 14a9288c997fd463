use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;

use crate::{
    crop::model::{Crop, CropDescriptor},
    crop::sampler::CropSampler,
    crop::subimage::SubImage,
    foundation::core::Resolution,
    foundation::error::{CropgenError, CropgenResult},
    geometry::region::FractionRegion,
    verify::opts::{TooSmallPolicy, VerificationOpts},
};

// Spreads per-task seeds apart (2^64 / golden ratio).
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Crops chosen for one subtask.
#[derive(Debug)]
pub enum CropPlan<'a> {
    /// Crops with ids `0..crop_count`, in id order.
    Crops(Vec<Crop<'a>>),
    /// The subtask cannot hold a crop; verification is skipped.
    Skipped {
        /// The [`CropgenError::SubtaskTooSmall`] that caused the skip.
        reason: CropgenError,
    },
}

impl<'a> CropPlan<'a> {
    /// Planned crops; empty when skipped.
    pub fn crops(&self) -> &[Crop<'a>] {
        match self {
            Self::Crops(crops) => crops,
            Self::Skipped { .. } => &[],
        }
    }

    /// Whether verification was skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    /// Owned, serializable form of this plan.
    pub fn summary(&self) -> PlanSummary {
        match self {
            Self::Crops(crops) => PlanSummary::Crops {
                crops: crops.iter().map(Crop::describe).collect(),
            },
            Self::Skipped { reason } => PlanSummary::Skipped {
                reason: reason.to_string(),
            },
        }
    }
}

/// Serializable outcome of planning one subtask.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PlanSummary {
    /// Crops to re-render and compare.
    Crops {
        /// One descriptor per crop, in id order.
        crops: Vec<CropDescriptor>,
    },
    /// Verification skipped.
    Skipped {
        /// Human-readable cause.
        reason: String,
    },
}

/// One subtask as handed over by the assignment layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubtaskSpec {
    /// Assigned border, in fractions.
    pub region: FractionRegion,
    /// Full frame resolution.
    pub resolution: Resolution,
}

/// Sample `opts.crop_count` crops for `subimage`.
///
/// Under [`TooSmallPolicy::Skip`], a subtask too small to hold a crop yields
/// [`CropPlan::Skipped`] instead of an error.
#[tracing::instrument(
    skip(subimage, opts, rng),
    fields(strategy = ?opts.strategy, crop_count = opts.crop_count)
)]
pub fn plan_crops<'a, R: Rng + ?Sized>(
    subimage: &'a SubImage,
    opts: &VerificationOpts,
    rng: &mut R,
) -> CropgenResult<CropPlan<'a>> {
    opts.validate()?;
    let sampler = opts.sampler()?;

    let mut crops = Vec::with_capacity(opts.crop_count as usize);
    for id in 0..opts.crop_count {
        match sampler.sample(subimage, id, rng) {
            Ok(crop) => crops.push(crop),
            Err(e) if e.is_subtask_too_small() && opts.on_too_small == TooSmallPolicy::Skip => {
                tracing::warn!(
                    region = ?subimage.region(),
                    error = %e,
                    "skipping verification for subtask"
                );
                return Ok(CropPlan::Skipped { reason: e });
            }
            Err(e) => return Err(e),
        }
    }
    Ok(CropPlan::Crops(crops))
}

/// Generator for the `stream`-th task of a session.
///
/// Seeded options give every stream its own reproducible sequence; unseeded options draw a
/// fresh generator from OS entropy.
pub fn session_rng(opts: &VerificationOpts, stream: u64) -> StdRng {
    match opts.seed {
        Some(seed) => {
            StdRng::seed_from_u64(seed.wrapping_add(stream.wrapping_mul(SEED_STRIDE)))
        }
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Plan crops for many subtasks in parallel.
///
/// Results are in input order. Each subtask gets its own generator from [`session_rng`], so
/// seeded runs are reproducible regardless of scheduling. Invalid options fail the whole batch;
/// an invalid subtask only fails its own entry.
#[tracing::instrument(skip(subtasks, opts), fields(subtasks = subtasks.len()))]
pub fn plan_batch(
    subtasks: &[SubtaskSpec],
    opts: &VerificationOpts,
) -> CropgenResult<Vec<CropgenResult<PlanSummary>>> {
    opts.validate()?;

    Ok(subtasks
        .par_iter()
        .enumerate()
        .map(|(idx, spec)| -> CropgenResult<PlanSummary> {
            let subimage = SubImage::new(spec.region, spec.resolution)?;
            let mut rng = session_rng(opts, idx as u64);
            Ok(plan_crops(&subimage, opts, &mut rng)?.summary())
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/verify/plan.rs"]
mod tests;
