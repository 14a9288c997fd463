//! Single-precision helpers matching the external renderer's pixel arithmetic.
//!
//! The renderer works in `f32` while most of our surrounding arithmetic would naturally be `f64`,
//! so every helper here narrows its inputs to `f32` before multiplying. Rust never fuses
//! `a * b + c` into an FMA implicitly, so the rounding of each step matches the renderer.

/// Half-pixel offset the renderer adds when snapping fractions to pixel edges.
pub(crate) const PIXEL_OFFSET: f32 = 0.5;

/// `floor(f32(frac) * f32(dim) + 0.5)`.
#[inline]
pub(crate) fn scale_round_f32(frac: f32, dim: u32) -> i32 {
    (frac * dim as f32 + PIXEL_OFFSET).floor() as i32
}

/// `floor(f32(frac) * f32(dim))`, no half-pixel offset.
#[inline]
pub(crate) fn scale_floor_f32(frac: f32, dim: u32) -> i32 {
    (frac * dim as f32).floor() as i32
}

/// `(f32(px) + 0.5) / f32(dim)`.
#[inline]
pub(crate) fn unscale_f32(px: i32, dim: u32) -> f32 {
    (px as f32 + PIXEL_OFFSET) / dim as f32
}

/// Hundredths are the granularity of fraction-space crop placement.
pub(crate) const HUNDREDTHS: i64 = 100;

// Guards against f32 noise like 0.7f32 * 100 = 69.99999 when snapping to hundredths.
const HUNDREDTHS_EPSILON: f64 = 1e-4;

/// Smallest whole number of hundredths whose `f32` value is `>= frac`.
#[inline]
pub(crate) fn hundredths_ceil(frac: f32) -> i64 {
    let snapped = (f64::from(frac) * HUNDREDTHS as f64 - HUNDREDTHS_EPSILON).ceil() as i64;
    // The epsilon may snap past a bound sitting just above a grid line.
    if hundredths_to_f32(snapped) < frac {
        snapped + 1
    } else {
        snapped
    }
}

/// Largest whole number of hundredths whose `f32` value is `<= frac`.
#[inline]
pub(crate) fn hundredths_floor(frac: f32) -> i64 {
    let snapped = (f64::from(frac) * HUNDREDTHS as f64 + HUNDREDTHS_EPSILON).floor() as i64;
    if hundredths_to_f32(snapped) > frac {
        snapped - 1
    } else {
        snapped
    }
}

/// Convert a hundredths count back to a fraction.
#[inline]
pub(crate) fn hundredths_to_f32(hundredths: i64) -> f32 {
    (hundredths as f64 / HUNDREDTHS as f64) as f32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
