use std::{io, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "rtvid",
    version,
    about = "Toy real-time video processor: generate, transform and report frames"
)]
struct Cli {
    /// JSON run configuration; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Effect: invert, brightness, threshold (or menu number 1-3). Unknown values mean invert.
    /// Without this flag or --config the effect menu is shown on stdin.
    #[arg(long)]
    effect: Option<String>,

    /// Brightness delta (used with the brightness effect).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    delta: i32,

    /// Threshold level (used with the threshold effect).
    #[arg(long, default_value_t = rtvid::DEFAULT_LEVEL, allow_negative_numbers = true)]
    threshold: i32,

    /// Number of frames to run.
    #[arg(long)]
    frames: Option<u64>,

    /// Pipeline cadence in frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Fixed RNG seed for reproducible frames.
    #[arg(long)]
    seed: Option<u64>,

    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Also write every processed frame as a grayscale PNG into this directory.
    #[arg(long)]
    dump_dir: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = resolve_config(&cli)?;
    cfg.validate()?;

    let mut sinks = rtvid::FanoutSink::new();
    match cli.format {
        ReportFormat::Text => sinks.push(rtvid::TextSink::new(io::stdout().lock())),
        ReportFormat::Json => sinks.push(rtvid::JsonLinesSink::new(io::stdout().lock())),
    }
    if let Some(dir) = &cli.dump_dir {
        sinks.push(rtvid::PngDumpSink::new(dir));
    }

    let mut runner = cfg.build_runner()?;
    let stats = match runner.run(cfg.frame_count, cfg.transform, &mut sinks) {
        Ok(stats) => stats,
        Err(rtvid::RtvidError::SinkClosed(msg)) => {
            tracing::info!(%msg, "report reader closed; stopping");
            return Ok(());
        }
        Err(e) => return Err(anyhow::Error::new(e).context("pipeline run failed")),
    };

    if let Some(dir) = &cli.dump_dir {
        eprintln!("wrote {} frames to {}", stats.frames_processed, dir.display());
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<rtvid::RunConfig> {
    let mut cfg = match &cli.config {
        Some(path) => rtvid::RunConfig::from_json_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => rtvid::RunConfig::default(),
    };

    match &cli.effect {
        Some(raw) => {
            cfg.transform =
                rtvid::EffectChoice::parse_lenient(raw).into_transform(cli.delta, cli.threshold);
        }
        None if cli.config.is_none() => {
            let mut stderr = io::stderr();
            eprintln!("\n=== RT-VidOS: Toy Real-Time Video Processor ===");
            cfg.transform = rtvid::prompt_selection(&mut io::stdin().lock(), &mut stderr)
                .context("read effect selection")?;
        }
        None => {}
    }

    if let Some(frames) = cli.frames {
        cfg.frame_count = frames;
    }
    if let Some(fps) = cli.fps {
        cfg.fps = fps;
    }
    if cli.seed.is_some() {
        cfg.seed = cli.seed;
    }
    Ok(cfg)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
