use super::*;

fn region(left: f32, top: f32, right: f32, bottom: f32) -> FractionRegion {
    FractionRegion {
        left,
        top,
        right,
        bottom,
    }
}

#[test]
fn half_frame_region_snaps_with_vertical_swap() {
    let r = region(0.0, 1.0, 0.5, 0.5);
    let p = region_to_pixels(&r, 800, 600);
    assert_eq!(p, PixelRegion::new(0, 300, 400, 600));
}

#[test]
fn forward_transform_rounds_in_single_precision() {
    // Each of these lands on the other side of an integer in double precision.
    assert_eq!(region_to_pixels(&region(0.145, 0.0, 0.145, 0.0), 100, 1).left, 15);
    assert_eq!(
        region_to_pixels(&region(0.0, 0.0525, 0.0, 0.0525), 1, 600),
        PixelRegion::new(0, 31, 0, 31)
    );
}

#[test]
fn inverse_adds_half_pixel_and_swaps_back() {
    let p = PixelRegion::new(192, 864, 672, 216);
    let r = pixels_to_region(&p, 1920, 1080);
    assert_eq!(r.left, (192.0f32 + 0.5) / 1920.0);
    assert_eq!(r.right, (672.0f32 + 0.5) / 1920.0);
    assert_eq!(r.bottom, (864.0f32 + 0.5) / 1080.0);
    assert_eq!(r.top, (216.0f32 + 0.5) / 1080.0);
}

#[test]
fn snapped_extents_are_non_negative_for_ordered_regions() {
    for (w, h) in [(1, 1), (7, 3), (320, 240), (333, 777), (1920, 1080), (4096, 2160)] {
        for a in 0..=20u8 {
            for b in (a + 1)..=20u8 {
                let lo = f32::from(a) / 20.0;
                let hi = f32::from(b) / 20.0;
                let p = region_to_pixels(&region(lo, lo, hi, hi), w, h);
                assert!(p.right >= p.left, "{w}x{h} {lo}..{hi}: {p:?}");
                assert!(p.bottom <= p.top, "{w}x{h} {lo}..{hi}: {p:?}");
            }
        }
    }
}

#[test]
fn round_trip_drifts_by_at_most_one_pixel() {
    for (w, h) in [(10, 10), (333, 250), (800, 600), (1920, 1080)] {
        let px_w = 1.0 / w as f32 + 1e-6;
        let px_h = 1.0 / h as f32 + 1e-6;
        for step in 0..=40u8 {
            let v = f32::from(step) / 40.0;
            let r = region(v * 0.5, v * 0.25, v * 0.5 + 0.5, v * 0.25 + 0.75);
            let back = pixels_to_region(&region_to_pixels(&r, w, h), w, h);

            assert!((back.left - r.left).abs() <= px_w, "{r:?} -> {back:?}");
            assert!((back.right - r.right).abs() <= px_w, "{r:?} -> {back:?}");
            assert!((back.top - r.top).abs() <= px_h, "{r:?} -> {back:?}");
            assert!((back.bottom - r.bottom).abs() <= px_h, "{r:?} -> {back:?}");
        }
    }
}

#[test]
fn round_trip_is_not_exact() {
    let r = region(0.25, 0.25, 0.75, 0.75);
    let back = pixels_to_region(&region_to_pixels(&r, 333, 333), 333, 333);
    assert_ne!(back, r);
    assert_eq!(back.left, (83.0f32 + 0.5) / 333.0);
}
