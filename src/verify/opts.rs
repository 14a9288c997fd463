use std::path::Path;

use anyhow::Context as _;

use crate::{
    crop::sampler::{Sampler, SamplerKind},
    foundation::error::{CropgenError, CropgenResult},
};

/// What to do when a subtask is too small to hold a crop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooSmallPolicy {
    /// Skip verification for the subtask and report why.
    #[default]
    Skip,
    /// Return [`CropgenError::SubtaskTooSmall`] to the caller.
    Fail,
}

/// Options controlling crop planning for a verification session.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerificationOpts {
    /// Sampling algorithm.
    pub strategy: SamplerKind,
    /// Crops per subtask. Must be > 0.
    pub crop_count: u32,
    /// Fixed `[width, height]` for the legacy sampler. `None` scales with the subtask.
    pub legacy_crop_size: Option<[u32; 2]>,
    /// Seed for reproducible placement. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Handling of subtasks too small to verify.
    pub on_too_small: TooSmallPolicy,
}

impl Default for VerificationOpts {
    fn default() -> Self {
        Self {
            strategy: SamplerKind::Fraction,
            crop_count: 3,
            legacy_crop_size: None,
            seed: None,
            on_too_small: TooSmallPolicy::Skip,
        }
    }
}

impl VerificationOpts {
    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> CropgenResult<Self> {
        let opts: Self = serde_json::from_str(s).map_err(|e| CropgenError::serde(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Read and parse options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> CropgenResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read verification options '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Check option ranges.
    pub fn validate(&self) -> CropgenResult<()> {
        if self.crop_count == 0 {
            return Err(CropgenError::validation("crop_count must be > 0"));
        }
        self.sampler().map(|_| ())
    }

    /// Sampler selected by these options.
    pub fn sampler(&self) -> CropgenResult<Sampler> {
        Sampler::new(self.strategy, self.legacy_crop_size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/verify/opts.rs"]
mod tests;
