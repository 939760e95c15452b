//! Log Sink Setup
//!
//! Builds the `tracing` subscriber that writes one line per event to an
//! append-only log file.
//!
//! The subscriber is returned as a value instead of being installed
//! process-wide. The binary installs it with
//! [`tracing::subscriber::set_default`] and tests pass in their own writer.
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directives (default: `futures_trader=info`)
//! - `TRADER_LOG_FILE`: log file path (see [`crate::infrastructure::config`])
//!
//! # Usage
//!
//! ```rust,ignore
//! use futures_trader::infrastructure::telemetry::{env_filter, file_subscriber};
//!
//! let subscriber = file_subscriber("trading_bot.log", env_filter())?;
//! let _guard = tracing::subscriber::set_default(subscriber);
//! ```

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "futures_trader=info";

/// Log sink errors.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Log file could not be opened for appending.
    #[error("cannot open log file {path}: {source}")]
    OpenLogFile {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Build a plain-text subscriber writing to `writer`.
pub fn build_subscriber<W>(
    filter: EnvFilter,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .finish()
}

/// Build a subscriber appending to the file at `path`, creating it if needed.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn file_subscriber(
    path: impl AsRef<Path>,
    filter: EnvFilter,
) -> Result<impl tracing::Subscriber + Send + Sync + 'static, TelemetryError> {
    let path = path.as_ref();
    let file = open_append(path)?;
    Ok(build_subscriber(filter, Mutex::new(file)))
}

fn open_append(path: &Path) -> Result<File, TelemetryError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| TelemetryError::OpenLogFile {
            path: path.display().to_string(),
            source,
        })
}

#[cfg(test)]
pub(crate) use capture::LogCapture;

#[cfg(test)]
mod capture {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt::MakeWriter;

    /// In-memory log sink for assertions on emitted events.
    #[derive(Debug, Clone, Default)]
    pub struct LogCapture {
        buf: Arc<Mutex<Vec<u8>>>,
    }

    impl LogCapture {
        /// Subscriber writing into this capture at debug level.
        pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
            super::build_subscriber(EnvFilter::new("futures_trader=debug"), self.clone())
        }

        /// Everything logged so far.
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogCapture {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogCapture {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }
}
