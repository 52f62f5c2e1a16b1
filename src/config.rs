//! Logger configuration: line-format flags, output sinks and the
//! process-wide defaults snapshotted by [`Logger::new`](crate::Logger::new).

use std::{
    io::{self, Write},
    sync::{Arc, LazyLock, Mutex, RwLock},
};

use crate::level::Level;

/// Shared handle to a writable output stream. Cloning shares the stream;
/// every channel built from the same handle writes to the same place.
pub type LogSink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Sink over the process stdout.
pub fn stdout_sink() -> LogSink {
    Arc::new(Mutex::new(Box::new(io::stdout())))
}

/// Sink over the process stderr.
pub fn stderr_sink() -> LogSink {
    Arc::new(Mutex::new(Box::new(io::stderr())))
}

/// Which metadata segments each emitted line carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineFormat {
    /// Prepend the calendar date (`2026/08/23`).
    pub date: bool,
    /// Prepend the wall-clock time (`14:03:05`).
    pub time: bool,
    /// Prepend the short caller location (`main.rs:42:`).
    pub source: bool,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            date: true,
            time: true,
            source: true,
        }
    }
}

impl LineFormat {
    /// All segments off: lines carry only the tag and the message.
    pub const fn none() -> Self {
        Self {
            date: false,
            time: false,
            source: false,
        }
    }
}

/// Configuration snapshotted into a logger at construction. The four
/// channels built from it are fixed afterwards; only the threshold stays
/// mutable on the logger itself.
#[derive(Clone)]
pub struct LogConfig {
    /// Initial visibility floor.
    pub threshold: Level,
    /// Destination stream shared by all four channels.
    pub output: LogSink,
    /// Line metadata flags for all four channels.
    pub format: LineFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            threshold: Level::Info,
            output: stdout_sink(),
            format: LineFormat::default(),
        }
    }
}

/// Process-wide defaults, read once per `Logger::new` call. Intended for a
/// single configuration step at startup; loggers constructed earlier keep
/// the channels they were built with.
static DEFAULTS: LazyLock<RwLock<LogConfig>> = LazyLock::new(|| RwLock::new(LogConfig::default()));

/// Sets the default threshold for loggers constructed afterwards.
pub fn set_default_threshold(threshold: Level) {
    DEFAULTS.write().unwrap().threshold = threshold;
}

/// Sets the default output for loggers constructed afterwards.
pub fn set_default_output(output: LogSink) {
    DEFAULTS.write().unwrap().output = output;
}

/// Sets the default line format for loggers constructed afterwards.
pub fn set_default_format(format: LineFormat) {
    DEFAULTS.write().unwrap().format = format;
}

pub(crate) fn snapshot_defaults() -> LogConfig {
    DEFAULTS.read().unwrap().clone()
}
