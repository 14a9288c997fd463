//! Coordinate transforms between fraction and pixel space.

mod raster;

pub use raster::{pixels_to_region, region_to_pixels};
