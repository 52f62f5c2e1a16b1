//! # mlog
//! Minimal leveled logger: four fixed severity channels over a shared output
//! stream, filtered by a thread-safe threshold.
//!
//! ## Usage
//! ```rust
//! use mlog::{Level, Logger};
//!
//! let logger = Logger::new();
//! mlog::info!(logger, "starting with {} workers", 4);
//! mlog::debug!(logger, "not visible at the default threshold");
//!
//! logger.set_threshold(Level::Debug);
//! mlog::debug!(logger, "visible now");
//! ```
//!
//! ## Custom configuration
//! Channels are fixed at construction time. Pass an explicit [`LogConfig`]
//! for full control, or seed the process-wide defaults once at startup and
//! let [`Logger::new`] snapshot them.
//!
//! ```rust
//! use mlog::{Level, LineFormat, LogConfig, Logger};
//!
//! let config = LogConfig {
//!     threshold: Level::Warning,
//!     output: mlog::stderr_sink(),
//!     format: LineFormat { date: true, time: true, source: false },
//! };
//! let logger = Logger::with_config(&config);
//! mlog::warning!(logger, "disk usage at {}%", 93);
//! ```
//!
//! ## As a `log` backend
//! ```rust
//! mlog::init(mlog::Logger::new()).ok();
//! log::info!("routed through the logger's info channel");
//! ```
//!
//! ## Fatal errors
//! [`Logger::error`] writes the error's message to the error channel and
//! then panics with that same message; it never returns. Use
//! [`Logger::write_error`] to log an error without aborting.

mod config;
mod facade;
mod level;
mod logger;
mod macros;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::{
    LineFormat, LogConfig, LogSink, set_default_format, set_default_output,
    set_default_threshold, stderr_sink, stdout_sink,
};
pub use facade::init;
pub use level::Level;
pub use logger::Logger;
