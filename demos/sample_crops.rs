use cropgen::{
    FractionRegion, PlanSummary, Resolution, SamplerKind, SubtaskSpec, VerificationOpts,
    plan_batch,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let resolution = Resolution::new(1920, 1080)?;

    // Four horizontal strips, as a frame split across four workers.
    let subtasks = (0..4)
        .map(|i| -> cropgen::CropgenResult<SubtaskSpec> {
            let top = i as f32 * 0.25;
            Ok(SubtaskSpec {
                region: FractionRegion::new(0.0, top, 1.0, top + 0.25)?,
                resolution,
            })
        })
        .collect::<cropgen::CropgenResult<Vec<_>>>()?;

    for strategy in [SamplerKind::Fraction, SamplerKind::Legacy] {
        let opts = VerificationOpts {
            strategy,
            seed: Some(42),
            ..VerificationOpts::default()
        };
        println!("{strategy:?}:");
        for (idx, plan) in plan_batch(&subtasks, &opts)?.into_iter().enumerate() {
            match plan? {
                PlanSummary::Crops { crops } => {
                    for c in crops {
                        let r = c.crop_region;
                        println!(
                            "  subtask {idx} crop {}: border [{:.4}, {:.4}, {:.4}, {:.4}] at {:?} ({:?} rows)",
                            c.id,
                            r.left,
                            r.top,
                            r.right,
                            r.bottom,
                            c.relative_top_left,
                            c.pixel_space
                        );
                    }
                }
                PlanSummary::Skipped { reason } => println!("  subtask {idx} skipped: {reason}"),
            }
        }
    }

    Ok(())
}
