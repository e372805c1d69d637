//! Tracing setup: one layer to stderr, one appending to a log file.
//!
//! The subscriber is constructed explicitly at process start; the returned
//! [`LogGuard`] keeps the file handle and syncs it when dropped at exit.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::ExportError;

pub struct LogGuard {
    file: Arc<File>,
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        let _ = self.file.sync_all();
    }
}

/// Initialize the global subscriber. Call exactly once, early in `main()`.
///
/// `RUST_LOG` overrides the default `info` level.
pub fn init(path: &Path) -> Result<LogGuard, ExportError> {
    let file = Arc::new(
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?,
    );

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(Arc::clone(&file)))
        .init();

    Ok(LogGuard { file })
}
