use super::*;
use crate::crop::sampler::SamplerKind;

fn subimage(region: [f32; 4], width: u32, height: u32) -> SubImage {
    let [left, top, right, bottom] = region;
    SubImage::new(
        FractionRegion::new(left, top, right, bottom).unwrap(),
        Resolution::new(width, height).unwrap(),
    )
    .unwrap()
}

fn seeded(seed: u64) -> VerificationOpts {
    VerificationOpts {
        seed: Some(seed),
        ..VerificationOpts::default()
    }
}

#[test]
fn plans_crop_count_crops_with_sequential_ids() {
    let sub = subimage([0.0, 0.0, 0.5, 0.5], 1920, 1080);
    let opts = VerificationOpts {
        crop_count: 4,
        ..seeded(1)
    };
    let mut rng = session_rng(&opts, 0);
    let plan = plan_crops(&sub, &opts, &mut rng).unwrap();

    assert!(!plan.is_skipped());
    let ids: Vec<u32> = plan.crops().iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn too_small_subtask_is_skipped_by_default() {
    let sub = subimage([0.0, 0.0, 0.05, 1.0], 100, 100);
    let opts = VerificationOpts {
        strategy: SamplerKind::Legacy,
        ..seeded(2)
    };
    let mut rng = session_rng(&opts, 0);
    let plan = plan_crops(&sub, &opts, &mut rng).unwrap();

    assert!(plan.is_skipped());
    assert!(plan.crops().is_empty());
    match plan.summary() {
        PlanSummary::Skipped { reason } => assert!(reason.contains("along x"), "{reason}"),
        other => panic!("unexpected summary: {other:?}"),
    }
}

#[test]
fn too_small_subtask_fails_under_fail_policy() {
    let sub = subimage([0.0, 0.0, 0.05, 1.0], 100, 100);
    let opts = VerificationOpts {
        on_too_small: TooSmallPolicy::Fail,
        ..seeded(2)
    };
    let mut rng = session_rng(&opts, 0);
    let err = plan_crops(&sub, &opts, &mut rng).unwrap_err();
    assert!(err.is_subtask_too_small());
}

#[test]
fn seeded_sessions_are_reproducible() {
    let sub = subimage([0.2, 0.1, 0.9, 0.8], 1280, 720);
    let opts = seeded(77);

    let a = plan_crops(&sub, &opts, &mut session_rng(&opts, 3))
        .unwrap()
        .summary();
    let b = plan_crops(&sub, &opts, &mut session_rng(&opts, 3))
        .unwrap()
        .summary();
    assert_eq!(a, b);

    let c = plan_crops(&sub, &opts, &mut session_rng(&opts, 4))
        .unwrap()
        .summary();
    assert_ne!(a, c);
}

#[test]
fn batch_preserves_order_and_isolates_bad_subtasks() {
    let res = Resolution::new(800, 600).unwrap();
    let subtasks = vec![
        SubtaskSpec {
            region: FractionRegion::new(0.0, 0.0, 1.0, 0.5).unwrap(),
            resolution: res,
        },
        SubtaskSpec {
            region: FractionRegion::new(0.0, 1.0, 1.0, 0.5).unwrap(),
            resolution: res,
        },
        SubtaskSpec {
            region: FractionRegion::new(0.0, 0.5, 0.02, 1.0).unwrap(),
            resolution: res,
        },
    ];
    let opts = seeded(5);
    let out = plan_batch(&subtasks, &opts).unwrap();
    assert_eq!(out.len(), 3);

    match out[0].as_ref().unwrap() {
        PlanSummary::Crops { crops } => assert_eq!(crops.len(), 3),
        other => panic!("unexpected summary: {other:?}"),
    }
    assert!(matches!(out[1], Err(CropgenError::Validation(_))));
    assert!(matches!(out[2], Ok(PlanSummary::Skipped { .. })));

    let sub = SubImage::new(subtasks[0].region, res).unwrap();
    let sequential = plan_crops(&sub, &opts, &mut session_rng(&opts, 0))
        .unwrap()
        .summary();
    assert_eq!(out[0].as_ref().unwrap(), &sequential);
}

#[test]
fn batch_rejects_invalid_options_up_front() {
    let opts = VerificationOpts {
        crop_count: 0,
        ..VerificationOpts::default()
    };
    assert!(plan_batch(&[], &opts).is_err());
}

#[test]
fn summary_serializes_with_status_tag() {
    let sub = subimage([0.0, 0.0, 1.0, 1.0], 320, 240);
    let opts = VerificationOpts {
        crop_count: 1,
        ..seeded(9)
    };
    let plan = plan_crops(&sub, &opts, &mut session_rng(&opts, 0)).unwrap();
    let v = serde_json::to_value(plan.summary()).unwrap();
    assert_eq!(v["status"], "crops");
    assert_eq!(v["crops"].as_array().unwrap().len(), 1);
    assert_eq!(v["crops"][0]["id"], 0);
}
