//! # Sketchpad CLI
//!
//! Runs a shape script and writes the resulting drawing as SVG.
//!
//! The script comes from a file argument, or from the persistent slot in
//! the data directory (seeded with a default script on first run). After
//! a completed run the script text is saved back to the slot, so plain
//! `sketchpad` replays the last script.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sketchpad_script::{Interpreter, ScriptStore};
use sketchpad_svg::SvgSurface;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Script file to run; omit to replay the stored script.
    script: Option<PathBuf>,

    /// Write the resulting SVG document here.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write the transcript as JSON here.
    #[arg(long)]
    log_json: Option<PathBuf>,

    /// Directory holding the persistent script slot.
    #[arg(long, env = "SKETCHPAD_DATA_DIR", default_value = ".sketchpad")]
    data_dir: PathBuf,

    /// Drawing surface width.
    #[arg(long, default_value_t = sketchpad_svg::DEFAULT_WIDTH)]
    width: u32,

    /// Drawing surface height.
    #[arg(long, default_value_t = sketchpad_svg::DEFAULT_HEIGHT)]
    height: u32,
}

/// Initialize structured tracing.
///
/// Set `RUST_LOG` to control log levels (default: warn; the transcript,
/// not the log, is the user-facing output).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Cli::parse();

    let store = ScriptStore::new(&args.data_dir)
        .with_context(|| format!("Opening data directory {}", args.data_dir.display()))?;

    let script = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?,
        None => store.load().context("Loading stored script")?,
    };

    let surface = SvgSurface::new(args.width, args.height);
    let interpreter = Interpreter::with_store(surface, store);

    let outcome = interpreter.run(&script).await;
    tracing::debug!(?outcome, "run finished");

    let session = interpreter.session().await;
    print!("{}", session.transcript().render());

    if let Some(path) = &args.log_json {
        let json = session
            .transcript()
            .to_json()
            .context("Serializing transcript")?;
        std::fs::write(path, json).with_context(|| format!("Writing {}", path.display()))?;
    }

    if let Some(out) = &args.out {
        std::fs::write(out, session.surface().to_svg())
            .with_context(|| format!("Writing {}", out.display()))?;
        tracing::info!(path = %out.display(), "SVG written");
    }

    Ok(())
}
