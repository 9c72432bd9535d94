use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to `{log_dir}/distviz.log`.
///
/// The terminal belongs to ratatui while the app runs, so nothing may write
/// to stdout. The log level can be controlled via the `level` parameter or
/// the `RUST_LOG` environment variable.
pub fn init_logging(log_dir: &Path, level: &str) -> color_eyre::Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, "distviz.log");

    let default_filter = format!("distviz={level},distviz_core={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(
        "distviz logging initialized (log_path={})",
        log_dir.join("distviz.log").display()
    );
    Ok(())
}
