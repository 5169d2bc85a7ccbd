//! airmouse - hand-gesture mouse control.
//!
//! Replays a recorded hand-tracking trace through the gesture pipeline,
//! driving the platform cursor. A live camera and detector pair plugs into
//! the same traits programmatically; the binary only wires up replay.

use std::path::PathBuf;
use std::sync::atomic::Ordering;

use airmouse::runtime::{ControlConfig, ControlSession};
use airmouse::sink::{self, CursorSink, NoOpCursorSink};
use airmouse::tracking::Trace;
use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Hand-gesture mouse control
#[derive(Parser, Debug)]
#[command(name = "airmouse")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Recorded tracking trace to replay (JSON Lines)
    trace: PathBuf,

    /// Classify only: drop cursor actions instead of injecting them
    #[arg(long)]
    dry_run: bool,

    /// Keep landmarks as recorded instead of mirroring them
    #[arg(long)]
    no_mirror: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let trace = Trace::load(&cli.trace)
        .with_context(|| format!("failed to load trace {}", cli.trace.display()))?;
    info!(
        "loaded trace {} ({} frames, {}x{})",
        trace.header.capture_id,
        trace.len(),
        trace.header.width,
        trace.header.height
    );

    let cursor_sink: Box<dyn CursorSink> = if cli.dry_run {
        Box::new(NoOpCursorSink::new())
    } else {
        sink::platform_sink()
    };

    let config = ControlConfig {
        mirror: !cli.no_mirror,
        ..ControlConfig::default()
    };
    let mut session = ControlSession::new(config, cursor_sink);

    let stop = session.stop_flag();
    ctrlc::set_handler(move || {
        stop.store(true, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    let (mut frames, mut detector) = trace.into_pipeline();
    let stats = session.run(&mut frames, &mut detector)?;

    info!(
        "replay finished: {} moves, {} pans, {} clicks over {} frames",
        stats.moves, stats.pans, stats.clicks, stats.frames
    );
    Ok(())
}
