use super::*;
use crate::foundation::{core::Resolution, error::CropgenError};

fn left_half_upper() -> SubImage {
    SubImage::new(
        FractionRegion::new(0.0, 0.5, 0.5, 1.0).unwrap(),
        Resolution::new(800, 600).unwrap(),
    )
    .unwrap()
}

#[test]
fn from_region_scales_by_subimage_pixel_size() {
    let sub = left_half_upper();
    let crop_region = FractionRegion::new(0.25, 0.25, 0.5, 0.5).unwrap();
    let crop = Crop::from_region(7, crop_region, &sub).unwrap();

    assert_eq!(crop.id(), 7);
    assert_eq!(*crop.crop_region(), crop_region);
    // 400x300 subimage, not the 800x600 frame.
    assert_eq!(*crop.pixel_region(), PixelRegion::new(100, 150, 200, 75));
}

#[test]
fn from_pixel_region_maps_through_full_resolution() {
    let sub = left_half_upper();
    let pixels = PixelRegion::new(100, 500, 140, 460);
    let crop = Crop::from_pixel_region(1, pixels, &sub).unwrap();

    assert_eq!(*crop.pixel_region(), pixels);
    let r = crop.crop_region();
    assert_eq!(r.left, (100.0f32 + 0.5) / 800.0);
    assert_eq!(r.right, (140.0f32 + 0.5) / 800.0);
    assert_eq!(r.bottom, (500.0f32 + 0.5) / 600.0);
    assert_eq!(r.top, (460.0f32 + 0.5) / 600.0);
}

#[test]
fn constructors_reject_malformed_input() {
    let sub = left_half_upper();
    assert!(Crop::from_pixel_region(0, PixelRegion::new(140, 500, 100, 460), &sub).is_err());
    assert!(Crop::from_pixel_region(0, PixelRegion::new(100, 460, 140, 500), &sub).is_err());

    let nan = FractionRegion {
        left: f32::NAN,
        top: 0.0,
        right: 0.5,
        bottom: 0.5,
    };
    assert!(Crop::from_region(0, nan, &sub).is_err());
}

#[test]
fn from_region_rejects_vertically_inverted_border() {
    let sub = SubImage::new(
        FractionRegion::new(0.0, 0.0, 1.0, 1.0).unwrap(),
        Resolution::new(100, 100).unwrap(),
    )
    .unwrap();

    // Would snap to rows 30..50 with a height of -20.
    let inverted = FractionRegion::new(0.1, 0.5, 0.2, 0.3).unwrap();
    let err = Crop::from_region(0, inverted, &sub).unwrap_err();
    assert!(matches!(err, CropgenError::Validation(_)), "{err}");

    let upright = FractionRegion::new(0.1, 0.3, 0.2, 0.5).unwrap();
    let crop = Crop::from_region(0, upright, &sub).unwrap();
    assert_eq!(*crop.pixel_region(), PixelRegion::new(10, 50, 20, 30));
    assert_eq!(crop.pixel_space(), PixelSpace::Frame);
    assert_eq!(crop.size_px(), (10, 20));
}

#[test]
fn relative_top_left_measures_down_from_subimage_top() {
    let sub = left_half_upper();
    let crop = Crop::from_pixel_region(2, PixelRegion::new(100, 500, 140, 460), &sub).unwrap();
    assert_eq!(sub.pixel_region().top, 600);
    assert_eq!(crop.relative_top_left(), (100, 100));
}

#[test]
fn describe_snapshots_both_regions() {
    let sub = left_half_upper();
    let crop = Crop::from_pixel_region(3, PixelRegion::new(10, 590, 50, 550), &sub).unwrap();
    let d = crop.describe();

    assert_eq!(d.id, 3);
    assert_eq!(d.pixel_region, *crop.pixel_region());
    assert_eq!(d.crop_region, *crop.crop_region());
    assert_eq!(d.relative_top_left, [10, 10]);

    assert_eq!(d.pixel_space, PixelSpace::Frame);

    let v = serde_json::to_value(d).unwrap();
    assert_eq!(v["relative_top_left"], serde_json::json!([10, 10]));
    assert_eq!(v["pixel_region"]["top"], 590);
    assert_eq!(v["pixel_space"], "frame");
}
