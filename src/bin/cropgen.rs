use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cropgen", version)]
struct Cli {
    /// Log sampling decisions to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the pixel rectangle the renderer produces for a border.
    Pixels(PixelsArgs),
    /// Sample verification crops for one subtask.
    Sample(SampleArgs),
    /// Sample verification crops for a JSON list of subtasks.
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct RegionArgs {
    /// Left border fraction.
    #[arg(long, allow_negative_numbers = true)]
    left: f32,

    /// Top border fraction.
    #[arg(long, allow_negative_numbers = true)]
    top: f32,

    /// Right border fraction.
    #[arg(long, allow_negative_numbers = true)]
    right: f32,

    /// Bottom border fraction.
    #[arg(long, allow_negative_numbers = true)]
    bottom: f32,

    /// Frame width in pixels.
    #[arg(long)]
    width: u32,

    /// Frame height in pixels.
    #[arg(long)]
    height: u32,
}

#[derive(Args, Debug)]
struct PixelsArgs {
    #[command(flatten)]
    region: RegionArgs,
}

#[derive(Args, Debug)]
struct SessionArgs {
    /// Verification options JSON. Flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sampling algorithm.
    #[arg(long, value_enum)]
    strategy: Option<StrategyChoice>,

    /// Crops per subtask.
    #[arg(long)]
    count: Option<u32>,

    /// Seed for reproducible placement.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct SampleArgs {
    #[command(flatten)]
    region: RegionArgs,

    #[command(flatten)]
    session: SessionArgs,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Input JSON: an array of `{"region": {...}, "resolution": {...}}`.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    session: SessionArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyChoice {
    Legacy,
    Fraction,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.cmd {
        Command::Pixels(args) => cmd_pixels(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn cmd_pixels(args: PixelsArgs) -> anyhow::Result<()> {
    let (region, res) = parse_region(&args.region)?;
    let pixels = cropgen::transform::region_to_pixels(&region, res.width, res.height);
    print_json(&pixels)
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let (region, res) = parse_region(&args.region)?;
    let opts = load_opts(&args.session)?;

    let subimage = cropgen::SubImage::new(region, res)?;
    let mut rng = cropgen::session_rng(&opts, 0);
    let plan = cropgen::plan_crops(&subimage, &opts, &mut rng)?;
    print_json(&plan.summary())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let opts = load_opts(&args.session)?;
    let subtasks = read_subtasks_json(&args.in_path)?;

    let results = cropgen::plan_batch(&subtasks, &opts)?;
    let mut out = Vec::with_capacity(results.len());
    for (idx, r) in results.into_iter().enumerate() {
        out.push(r.with_context(|| format!("subtask #{idx}"))?);
    }
    print_json(&out)
}

fn parse_region(
    args: &RegionArgs,
) -> anyhow::Result<(cropgen::FractionRegion, cropgen::Resolution)> {
    let region = cropgen::FractionRegion::new(args.left, args.top, args.right, args.bottom)?;
    let res = cropgen::Resolution::new(args.width, args.height)?;
    Ok((region, res))
}

fn load_opts(args: &SessionArgs) -> anyhow::Result<cropgen::VerificationOpts> {
    let mut opts = match &args.config {
        Some(path) => cropgen::VerificationOpts::from_path(path)?,
        None => cropgen::VerificationOpts::default(),
    };
    if let Some(strategy) = args.strategy {
        opts.strategy = match strategy {
            StrategyChoice::Legacy => cropgen::SamplerKind::Legacy,
            StrategyChoice::Fraction => cropgen::SamplerKind::Fraction,
        };
    }
    if let Some(count) = args.count {
        opts.crop_count = count;
    }
    if args.seed.is_some() {
        opts.seed = args.seed;
    }
    opts.validate()?;
    Ok(opts)
}

fn read_subtasks_json(path: &Path) -> anyhow::Result<Vec<cropgen::SubtaskSpec>> {
    let f = File::open(path).with_context(|| format!("open subtasks '{}'", path.display()))?;
    let r = BufReader::new(f);
    let subtasks: Vec<cropgen::SubtaskSpec> =
        serde_json::from_reader(r).with_context(|| "parse subtasks JSON")?;
    Ok(subtasks)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{s}");
    Ok(())
}
