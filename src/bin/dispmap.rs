use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dispmap", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single scroll frame as a PNG.
    Frame(FrameArgs),
    /// Render every scroll frame into a directory of PNGs.
    Animate(AnimateArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Wide map image (any format `image` can decode; alpha is ignored).
    #[arg(long)]
    map: PathBuf,

    /// Target image; must carry an alpha channel.
    #[arg(long)]
    target: PathBuf,

    /// JSON file with scroll options; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Map channel for row displacement (0 blue, 1 green, 2 red).
    #[arg(long, allow_negative_numbers = true)]
    component_x: Option<i32>,

    /// Map channel for column displacement (0 blue, 1 green, 2 red).
    #[arg(long, allow_negative_numbers = true)]
    component_y: Option<i32>,

    /// Row displacement strength.
    #[arg(long, allow_negative_numbers = true)]
    scale_x: Option<i32>,

    /// Column displacement strength.
    #[arg(long, allow_negative_numbers = true)]
    scale_y: Option<i32>,

    /// Crop advance per frame, in pixels.
    #[arg(long)]
    step: Option<u32>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn read_opts(path: &Path) -> anyhow::Result<dispmap::ScrollOpts> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let opts: dispmap::ScrollOpts =
        serde_json::from_reader(r).with_context(|| "parse scroll options JSON")?;
    Ok(opts)
}

fn resolve_opts(input: &InputArgs) -> anyhow::Result<dispmap::ScrollOpts> {
    let mut opts = match &input.config {
        Some(path) => read_opts(path)?,
        None => dispmap::ScrollOpts::default(),
    };
    if let Some(v) = input.component_x {
        opts.component_x = v;
    }
    if let Some(v) = input.component_y {
        opts.component_y = v;
    }
    if let Some(v) = input.scale_x {
        opts.scale_x = v;
    }
    if let Some(v) = input.scale_y {
        opts.scale_y = v;
    }
    if let Some(v) = input.step {
        opts.step_x = v;
    }
    Ok(opts)
}

fn load_inputs(input: &InputArgs) -> anyhow::Result<(dispmap::Bgr8Image, dispmap::Bgra8Image)> {
    let map = dispmap::assets::load_map(&input.map)?;
    let target = dispmap::assets::load_target(&input.target)
        .with_context(|| "a PNG image with a transparent layer is required as target")?;
    tracing::info!(
        map_width = map.width(),
        map_height = map.height(),
        target_width = target.width(),
        target_height = target.height(),
        "inputs loaded"
    );
    Ok((map, target))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let opts = resolve_opts(&args.input)?;
    let (map, target) = load_inputs(&args.input)?;
    let session = dispmap::ScrollSession::new(&map, &target, &opts)?;

    let frame = session.render_frame(dispmap::FrameIndex(args.frame))?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    dispmap::assets::save_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let mut opts = resolve_opts(&args.input)?;
    if args.max_frames.is_some() {
        opts.max_frames = args.max_frames;
    }
    let (map, target) = load_inputs(&args.input)?;
    let session = dispmap::ScrollSession::new(&map, &target, &opts)?;

    let mut sink = dispmap::PngSequenceSink::new(&args.out_dir);
    let stats = session.render_to_sink(&mut sink)?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_rendered,
        args.out_dir.display()
    );
    Ok(())
}
