use rand::Rng;

use crate::{
    crop::fraction::FractionSampler,
    crop::legacy::LegacySampler,
    crop::model::Crop,
    crop::subimage::SubImage,
    foundation::error::CropgenResult,
};

/// Places one verification crop inside a subimage.
pub trait CropSampler {
    /// Sample a crop with the given `id`.
    ///
    /// Fails with [`crate::CropgenError::SubtaskTooSmall`] when no crop fits.
    fn sample<'a, R: Rng + ?Sized>(
        &self,
        subimage: &'a SubImage,
        id: u32,
        rng: &mut R,
    ) -> CropgenResult<Crop<'a>>;
}

/// Which sampling algorithm to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplerKind {
    /// Pixel-space placement with a 1px margin; kept for compatibility and regression checks.
    Legacy,
    /// Fraction-space placement at 0.01 granularity.
    #[default]
    Fraction,
}

/// The closed set of sampling strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sampler {
    /// See [`LegacySampler`].
    Legacy(LegacySampler),
    /// See [`FractionSampler`].
    Fraction(FractionSampler),
}

impl Sampler {
    /// Strategy for `kind`. `legacy_crop_size` only applies to [`SamplerKind::Legacy`].
    pub fn new(kind: SamplerKind, legacy_crop_size: Option<[u32; 2]>) -> CropgenResult<Self> {
        Ok(match kind {
            SamplerKind::Legacy => Self::Legacy(match legacy_crop_size {
                Some([w, h]) => LegacySampler::with_crop_size(w, h)?,
                None => LegacySampler::new(),
            }),
            SamplerKind::Fraction => Self::Fraction(FractionSampler),
        })
    }

    /// Which strategy this is.
    pub fn kind(&self) -> SamplerKind {
        match self {
            Self::Legacy(_) => SamplerKind::Legacy,
            Self::Fraction(_) => SamplerKind::Fraction,
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::Fraction(FractionSampler)
    }
}

impl CropSampler for Sampler {
    fn sample<'a, R: Rng + ?Sized>(
        &self,
        subimage: &'a SubImage,
        id: u32,
        rng: &mut R,
    ) -> CropgenResult<Crop<'a>> {
        match self {
            Self::Legacy(s) => s.sample(subimage, id, rng),
            Self::Fraction(s) => s.sample(subimage, id, rng),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/crop/sampler.rs"]
mod tests;
