//! tv-remote CLI
//!
//! Drive a simulated television from an interactive remote or from the
//! command line.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tv_remote::lineup::{default_lineup_path, Lineup};
use tv_remote::report::{format_lineup, format_status};
use tv_remote::television::Television;
use tv_remote::types::{Button, OutputFormat};

#[derive(Parser)]
#[command(name = "tv-remote")]
#[command(about = "Television remote-control simulator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Channel lineup JSON file (default: config dir, else built-in)
    #[arg(long, global = true)]
    lineup: Option<PathBuf>,

    /// Append logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive remote (default)
    Tui,

    /// Press buttons on a fresh television and print the result
    Press {
        /// Buttons in order: power, mute, channel-up (ch+), channel-down (ch-),
        /// volume-up (vol+), volume-down (vol-)
        buttons: Vec<Button>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Show the channel lineup
    Lineup {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);
    let interactive = matches!(command, Commands::Tui);

    // Held until main returns so the log writer flushes
    let _log_guard = match init_logging(cli.log_file.as_deref(), interactive) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let lineup = cli.lineup.as_deref();
    let result = match command {
        Commands::Tui => cmd_tui(lineup),
        Commands::Press { buttons, format } => cmd_press(lineup, &buttons, format.into()),
        Commands::Lineup { format } => cmd_lineup(lineup, format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

/// Install the global tracing subscriber.
///
/// With `--log-file`, everything goes to that file through a non-blocking
/// writer; the returned guard must live until exit so buffered lines are
/// flushed. Otherwise logs go to stderr, except for the interactive remote,
/// where stderr would draw over the alternate screen and logging stays off.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<Option<WorkerGuard>, String> {
    let filter = |default: &str| {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    match log_file {
        Some(path) => {
            let (writer, guard) = log_file_writer(path)?;
            tracing_subscriber::registry()
                .with(filter("tv_remote=debug"))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            Ok(Some(guard))
        }
        None if !interactive => {
            tracing_subscriber::registry()
                .with(filter("warn"))
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
            Ok(None)
        }
        None => Ok(None),
    }
}

/// Open `path` for appending behind a background writer thread.
fn log_file_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard), String> {
    let file_name = path
        .file_name()
        .ok_or_else(|| format!("log file {} has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(dir)
        .map_err(|e| format!("cannot create log directory {}: {}", dir.display(), e))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn load_lineup(explicit: Option<&Path>) -> Result<Lineup, String> {
    Lineup::resolve(explicit, &default_lineup_path()).map_err(|e| e.to_string())
}

fn cmd_tui(lineup: Option<&Path>) -> Result<(), String> {
    let lineup = load_lineup(lineup)?;
    tv_remote::tui::run(lineup).map_err(|e| e.to_string())
}

fn cmd_press(lineup: Option<&Path>, buttons: &[Button], format: OutputFormat) -> Result<(), String> {
    let lineup = load_lineup(lineup)?;
    let mut tv = Television::new();

    for &button in buttons {
        tv.press(button);
        info!(%button, state = %tv, muted = tv.is_muted(), "pressed");
    }

    print!("{}", format_status(&tv, &lineup, format));
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

fn cmd_lineup(lineup: Option<&Path>, format: OutputFormat) -> Result<(), String> {
    let lineup = load_lineup(lineup)?;

    print!("{}", format_lineup(&lineup, format));
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
