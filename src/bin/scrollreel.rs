use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const MAX_SWEEP_SAMPLES: f64 = 10_000_000.0;

#[derive(Parser, Debug)]
#[command(name = "scrollreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a reel config and report whether it is valid.
    Validate(ValidateArgs),
    /// Resolve a single scroll offset and print the snapshot as JSON.
    Resolve(ResolveArgs),
    /// Drive a session across a range of offsets, one JSON line per sample.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input reel config JSON.
    #[arg(long)]
    config: PathBuf,
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Input reel config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Scroll offset in host units.
    #[arg(long)]
    offset: f64,

    /// Viewport height in host units.
    #[arg(long)]
    viewport: f64,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Input reel config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Viewport height in host units.
    #[arg(long)]
    viewport: f64,

    /// First offset.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last offset; may be below `--from` to sweep upwards.
    #[arg(long)]
    to: f64,

    /// Distance between samples (> 0).
    #[arg(long)]
    step: f64,
}

#[derive(serde::Serialize)]
struct SweepLine {
    offset: f64,
    #[serde(flatten)]
    update: scrollreel::ReelUpdate,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Resolve(args) => cmd_resolve(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn init_logging() {
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path) -> anyhow::Result<scrollreel::ReelConfig> {
    scrollreel::ReelConfig::from_path(path)
        .with_context(|| format!("load reel config '{}'", path.display()))
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    cfg.validate()
        .with_context(|| format!("validate reel config '{}'", args.config.display()))?;
    println!(
        "ok: {} items, {} text sections, total extent {} viewports",
        cfg.gallery.len(),
        cfg.curves.text_sections.len(),
        cfg.layout.total_extent()
    );
    Ok(())
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let (resolver, _gallery) = cfg
        .build()
        .with_context(|| format!("validate reel config '{}'", args.config.display()))?;
    let sample = scrollreel::ScrollSample::new(args.offset, args.viewport)?;
    let snapshot = resolver.resolve(sample);
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("serialize snapshot")?
    );
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.step.is_finite() && args.step > 0.0,
        "--step must be finite and > 0"
    );
    anyhow::ensure!(
        args.from.is_finite() && args.to.is_finite(),
        "--from and --to must be finite"
    );
    let span = (args.to - args.from).abs();
    let count = (span / args.step).floor();
    anyhow::ensure!(
        count < MAX_SWEEP_SAMPLES,
        "sweep would produce more than {MAX_SWEEP_SAMPLES} samples"
    );
    let dir = if args.to < args.from { -1.0 } else { 1.0 };

    let cfg = load_config(&args.config)?;
    let mut session = scrollreel::ReelSession::new(&cfg)
        .with_context(|| format!("validate reel config '{}'", args.config.display()))?;
    session.dismiss_landing();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for i in 0..=(count as u64) {
        let offset = args.from + dir * (i as f64) * args.step;
        let sample = scrollreel::ScrollSample::new(offset, args.viewport)?;
        let Some(update) = session.on_scroll(sample) else {
            anyhow::bail!("session detached during sweep (bug)");
        };
        serde_json::to_writer(&mut out, &SweepLine { offset, update })
            .context("serialize sweep line")?;
        out.write_all(b"\n").context("write sweep line")?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}
