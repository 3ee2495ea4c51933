use anyhow::{Context, Result};
use clap::Parser;
use core_input::CrosstermInput;
use core_render::Writer;
use core_terminal::{CrosstermBackend, TerminalBackend};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

mod runtime;

use runtime::{Runtime, build_state};

const LOG_FILE: &str = "kiln.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "kiln", version, about = "Kiln text editor")]
struct Args {
    /// File to edit. Created on first save when it does not exist yet.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `kiln.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let config = core_config::load_from(args.config.clone())?;

    let mut backend = CrosstermBackend::new();
    backend.set_title("Kiln")?;
    let _terminal = backend.enter_guard()?;
    let size = core_terminal::window_size().context("getWindowSize")?;
    info!(
        target: "runtime",
        cols = size.cols,
        rows = size.rows,
        config_override = args.config.is_some(),
        "bootstrap_complete"
    );

    let state = build_state(&config, size, args.path.as_deref())?;
    let mut runtime = Runtime::new(state);
    let mut input = CrosstermInput::new(config.input().poll_timeout());
    runtime.run(&mut input, Writer::flush)?;

    info!(target: "runtime", "shutdown");
    Ok(())
}

/// Log to `kiln.log` in the working directory; the terminal belongs to the
/// editor. The file is recreated on every start.
fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE);
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(()) => Some(guard),
        // subscriber already installed; dropping the guard shuts the writer down
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}
