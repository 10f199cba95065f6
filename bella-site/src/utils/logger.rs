//! Logging Infrastructure
//!
//! - Console output, pretty in development and JSON otherwise
//! - Daily rotating application logs (deleted after 14 days)
//! - Daily rotating reservation logs (kept), fed by `reservation_log!`

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::Metadata;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::Layered;
use tracing_subscriber::{EnvFilter, Layer, Registry, filter, fmt, prelude::*};

/// Target used by `reservation_log!`; routed to its own file
pub const RESERVATION_TARGET: &str = "reservation";

const APP_LOG_PREFIX: &str = "app";
const RESERVATION_LOG_PREFIX: &str = "reservations";
const APP_LOG_RETENTION_DAYS: i64 = 14;

type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

/// Remove application log files older than 14 days
///
/// Rolled files are named `app.YYYY-MM-DD`; anything else in the directory is
/// left alone. Returns how many files were deleted.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    let app_log_dir = log_dir.join(APP_LOG_PREFIX);
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let cutoff = Local::now().date_naive() - chrono::Duration::days(APP_LOG_RETENTION_DAYS);
    let mut removed = 0;

    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(date) = rolled_file_date(name, APP_LOG_PREFIX) else {
            continue;
        };
        if date < cutoff {
            fs::remove_file(&path)?;
            removed += 1;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(removed)
}

/// Date suffix of a daily-rolled file, `<prefix>.YYYY-MM-DD`
fn rolled_file_date(name: &str, prefix: &str) -> Option<NaiveDate> {
    let date = name.strip_prefix(prefix)?.strip_prefix('.')?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - default filter when `RUST_LOG` is unset (e.g. "info", "debug")
/// * `json_format` - JSON output instead of the human-readable format
/// * `log_dir` - enables file logging under `<dir>/app` and `<dir>/reservations`
///
/// Must be called from within a tokio runtime when `log_dir` is set.
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<BoxedLayer> = vec![console_layer(json_format)];

    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        let app_log_dir = log_dir.join(APP_LOG_PREFIX);
        let reservation_log_dir = log_dir.join(RESERVATION_LOG_PREFIX);
        fs::create_dir_all(&app_log_dir)?;
        fs::create_dir_all(&reservation_log_dir)?;

        let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, APP_LOG_PREFIX);
        layers.push(file_layer(app_log, json_format, |meta| {
            meta.target() != RESERVATION_TARGET
        }));

        let reservation_log = RollingFileAppender::new(
            Rotation::DAILY,
            reservation_log_dir,
            RESERVATION_LOG_PREFIX,
        );
        layers.push(file_layer(reservation_log, json_format, |meta| {
            meta.target() == RESERVATION_TARGET
        }));

        tokio::spawn(periodic_cleanup(log_dir.to_path_buf()));
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()?;

    Ok(())
}

/// Console-only logging
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

fn console_layer(json_format: bool) -> BoxedLayer {
    let layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if json_format {
        layer
            .json()
            .with_current_span(true)
            .with_thread_ids(true)
            .boxed()
    } else {
        layer.boxed()
    }
}

fn file_layer(
    appender: RollingFileAppender,
    json_format: bool,
    keep: fn(&Metadata<'_>) -> bool,
) -> BoxedLayer {
    let layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(appender));

    if json_format {
        layer
            .json()
            .with_current_span(true)
            .with_filter(filter::filter_fn(keep))
            .boxed()
    } else {
        layer.with_filter(filter::filter_fn(keep)).boxed()
    }
}

/// Runs every hour
async fn periodic_cleanup(log_dir: PathBuf) {
    use tokio::time::{Duration, sleep};

    loop {
        sleep(Duration::from_secs(3600)).await;

        if let Err(e) = cleanup_old_logs(&log_dir) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
    }
}
