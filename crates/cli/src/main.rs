//! Scoundrel terminal front-end: line REPL, ratatui UI, or headless autoplay.

mod render;
mod repl;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use scoundrel_autoplay::{
    run_autoplay, run_batch, write_json, write_text, AutoplayConfig, PolicyKind,
};
use scoundrel_core::RngState;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scoundrel")]
#[command(about = "Single-player dungeon crawl played with a 44-card deck")]
struct Args {
    /// Deck seed; falls back to SCOUNDREL_SEED, then a random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Launch the full-screen terminal UI
    #[arg(long, conflicts_with = "auto")]
    cui: bool,

    /// Play headless games with an automatic policy
    #[arg(long)]
    auto: bool,

    /// Number of autoplay games (consecutive seeds)
    #[arg(long, default_value = "1")]
    games: u32,

    /// Step cap per autoplay game
    #[arg(long, default_value = "500")]
    max_steps: u32,

    /// Autoplay policy
    #[arg(long, default_value = "greedy")]
    policy: PolicyArg,

    /// Write the autoplay trace (or batch summary) as JSON
    #[arg(long)]
    trace_json: Option<PathBuf>,

    /// Write the autoplay trace (or batch summary) as text
    #[arg(long)]
    trace_text: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Random,
    Greedy,
}

impl From<PolicyArg> for PolicyKind {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Random => PolicyKind::Random,
            PolicyArg::Greedy => PolicyKind::Greedy,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args);

    let seed = resolve_seed(args.seed)?;
    if args.cui {
        return scoundrel_cui::run(scoundrel_cui::LaunchOptions { seed: Some(seed) })
            .context("cui launch");
    }
    if args.auto {
        return run_auto(&args, seed);
    }
    repl::run(seed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogTarget {
    Stderr,
    /// The terminal UI owns the screen; nothing may be written to it.
    Silent,
}

fn log_target(args: &Args) -> LogTarget {
    if args.cui {
        LogTarget::Silent
    } else {
        LogTarget::Stderr
    }
}

fn init_logging(args: &Args) {
    if log_target(args) == LogTarget::Silent {
        return;
    }
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_seed(arg: Option<u64>) -> Result<u64> {
    if let Some(seed) = arg {
        return Ok(seed);
    }
    match std::env::var("SCOUNDREL_SEED") {
        Ok(value) => value
            .parse::<u64>()
            .with_context(|| format!("SCOUNDREL_SEED is not a number: {value}")),
        Err(_) => Ok(RngState::from_entropy().seed()),
    }
}

fn run_auto(args: &Args, seed: u64) -> Result<()> {
    let config = AutoplayConfig {
        seed,
        games: args.games.max(1),
        max_steps: args.max_steps,
        policy: args.policy.into(),
        record_steps: args.games <= 1,
    };
    info!(seed, games = config.games, policy = config.policy.name(), "autoplay");

    if config.games == 1 {
        let result = run_autoplay(&config).context("autoplay run")?;
        let report = result.to_text_report();
        println!("{report}");
        if let Some(path) = args.trace_json.as_ref() {
            write_json(path, &result)
                .with_context(|| format!("write trace json to {}", path.display()))?;
        }
        if let Some(path) = args.trace_text.as_ref() {
            write_text(path, &report)
                .with_context(|| format!("write trace text to {}", path.display()))?;
        }
        return Ok(());
    }

    let summary = run_batch(&config).context("autoplay batch")?;
    let report = summary.to_text_report();
    println!("{report}");
    if let Some(path) = args.trace_json.as_ref() {
        write_json(path, &summary)
            .with_context(|| format!("write summary json to {}", path.display()))?;
    }
    if let Some(path) = args.trace_text.as_ref() {
        write_text(path, &report)
            .with_context(|| format!("write summary text to {}", path.display()))?;
    }
    Ok(())
}
