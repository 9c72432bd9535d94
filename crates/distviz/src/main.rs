use clap::Parser;
use distviz::{App, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "distviz")]
#[command(about = "Interactive terminal comparison of two normal distributions")]
struct Args {
    /// Directory for log files (default: ~/.distviz/)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Fix the sampling sequence for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".distviz")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let log_dir = args.log_dir.unwrap_or_else(default_log_dir);

    init_logging(&log_dir, &args.log_level)?;

    let mut app = App::new(args.seed);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
