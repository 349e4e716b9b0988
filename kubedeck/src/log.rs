use std::{fs::File, path::Path, sync::OnceLock};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::errors::{Error, Result};

static TRACER: OnceLock<()> = OnceLock::new();
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initializes file-backed logging. The terminal belongs to the UI, so all
/// output goes to `kubedeck.log` inside `log_dir`.
///
/// Safe to call more than once; only the first call installs the subscriber.
pub fn setup_logger(log_dir: &Path) -> Result<()> {
    let file = File::create(log_dir.join("kubedeck.log")).map_err(|source| Error::LogSetup {
        dir: log_dir.to_path_buf(),
        source,
    })?;

    TRACER.get_or_init(|| {
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file);

        let file_layer = fmt::layer()
            .with_line_number(true)
            .with_writer(non_blocking_writer)
            .with_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            );

        LOG_GUARD.set(guard).ok();

        tracing_subscriber::registry().with(file_layer).try_init().ok();
    });

    Ok(())
}
