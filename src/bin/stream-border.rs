use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use stream_border::{CpuPainter, FrameOutput, StreamBorder, StreamBorderConfig, StreamBorderStyle};

/// Longest span `frame` and `dump` will step through, in seconds.
const MAX_SIMULATED_SECONDS: f64 = 3600.0;

#[derive(Parser, Debug)]
#[command(name = "stream-border", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the frame at a given time as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence.
    Sequence(SequenceArgs),
    /// Print the frame geometry at a given time as JSON.
    Dump(DumpArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 200)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 100)]
    height: u32,

    /// Animation config JSON (defaults are used when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Time in seconds since the animation started.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Paint style JSON.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames to write.
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Paint style JSON.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Output directory; frames are written as `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct DumpArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Time in seconds since the animation started.
    #[arg(long, default_value_t = 0.0)]
    time: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn load_control(scene: &SceneArgs) -> anyhow::Result<StreamBorder> {
    let config = match &scene.config {
        Some(path) => StreamBorderConfig::from_path(path)?,
        None => StreamBorderConfig::default(),
    };
    let radius = config.corner_radius;
    let mut control = StreamBorder::new(config)?;
    control.set_boundary(f64::from(scene.width), f64::from(scene.height), radius);
    Ok(control)
}

fn load_style(path: Option<&Path>) -> anyhow::Result<StreamBorderStyle> {
    Ok(match path {
        Some(p) => StreamBorderStyle::from_path(p)?,
        None => StreamBorderStyle::default(),
    })
}

fn frame_duration(fps: u32) -> anyhow::Result<f64> {
    anyhow::ensure!(fps > 0, "--fps must be > 0");
    Ok(1.0 / f64::from(fps))
}

/// Tick the control at `0, 1/fps, 2/fps, ...` up to `time`, returning the last frame.
fn simulate_to(control: &mut StreamBorder, fps: u32, time: f64) -> anyhow::Result<FrameOutput> {
    anyhow::ensure!(
        time.is_finite() && (0.0..=MAX_SIMULATED_SECONDS).contains(&time),
        "--time must be in [0, {MAX_SIMULATED_SECONDS}]"
    );
    let dt = frame_duration(fps)?;
    let ticks = (time / dt).floor() as u64;
    let mut out = control.on_frame(0.0);
    for i in 1..=ticks {
        out = control.on_frame(i as f64 * dt);
    }
    if (ticks as f64) * dt < time {
        out = control.on_frame(time);
    }
    Ok(out)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut control = load_control(&args.scene)?;
    let style = load_style(args.style.as_deref())?;
    let out = simulate_to(&mut control, args.scene.fps, args.time)?;

    let mut painter = CpuPainter::new(args.scene.width, args.scene.height)?;
    let frame = painter.paint(&control, &out, &style)?;

    ensure_parent(&args.out)?;
    frame.write_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let mut control = load_control(&args.scene)?;
    let style = load_style(args.style.as_deref())?;
    let dt = frame_duration(args.scene.fps)?;
    let mut painter = CpuPainter::new(args.scene.width, args.scene.height)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for i in 0..args.frames {
        let out = control.on_frame(f64::from(i) * dt);
        let frame = painter
            .paint(&control, &out, &style)
            .with_context(|| format!("paint frame {i}"))?;
        let path = args.out_dir.join(format!("frame_{i:05}.png"));
        frame.write_png(&path)?;
    }

    eprintln!("wrote {} frames to {}", args.frames, args.out_dir.display());
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let mut control = load_control(&args.scene)?;
    let out = simulate_to(&mut control, args.scene.fps, args.time)?;
    let json = serde_json::to_string_pretty(&out).context("serialize frame output")?;
    println!("{json}");
    Ok(())
}
