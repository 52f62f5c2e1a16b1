//! The leveled logger and its per-tier output channels.

use std::{
    error::Error,
    fmt::{self, Write as _},
    io::Write as _,
    panic::Location,
    sync::{Arc, RwLock},
};

use chrono::Local;

use crate::{
    config::{LineFormat, LogConfig, LogSink},
    level::Level,
};

/// A tier's fixed output channel: tag prefix, line format and shared sink.
struct Channel {
    tag: &'static str,
    format: LineFormat,
    sink: LogSink,
}

impl Channel {
    fn new(tier: Level, config: &LogConfig) -> Self {
        Self {
            tag: tier.tag(),
            format: config.format,
            sink: Arc::clone(&config.output),
        }
    }

    /// Formats one line and writes it synchronously. The full line goes out
    /// in a single `writeln!` under the sink lock, so concurrent emitters
    /// never interleave within a line. Write failures are swallowed;
    /// emission has no failure path for the caller.
    fn emit(&self, file: &str, line_no: u32, args: fmt::Arguments<'_>) {
        let mut line = String::with_capacity(80);
        let now = Local::now();
        if self.format.date {
            let _ = write!(line, "{} ", now.format("%Y/%m/%d"));
        }
        if self.format.time {
            let _ = write!(line, "{} ", now.format("%H:%M:%S"));
        }
        if self.format.source {
            let short = file.rsplit(['/', '\\']).next().unwrap_or(file);
            let _ = write!(line, "{short}:{line_no}: ");
        }
        let _ = write!(line, "{}{}", self.tag, args);
        let mut sink = self.sink.lock().unwrap();
        let _ = writeln!(sink, "{line}");
        let _ = sink.flush();
    }

    fn flush(&self) {
        let _ = self.sink.lock().unwrap().flush();
    }
}

/// Leveled logger over four fixed channels sharing one output stream.
///
/// Channels are immutable after construction; only the threshold is mutable,
/// behind a per-instance reader/writer lock, so a `Logger` can be shared
/// across threads by reference.
pub struct Logger {
    threshold: RwLock<Level>,
    err: Channel,
    warn: Channel,
    inf: Channel,
    deb: Channel,
}

impl Logger {
    /// Creates a logger from the current process-wide defaults (see
    /// [`set_default_threshold`](crate::set_default_threshold) and friends).
    /// Later changes to the defaults do not affect it. Always succeeds.
    pub fn new() -> Self {
        Self::with_config(&crate::config::snapshot_defaults())
    }

    /// Creates a logger from an explicit configuration.
    pub fn with_config(config: &LogConfig) -> Self {
        Self {
            threshold: RwLock::new(config.threshold),
            err: Channel::new(Level::Error, config),
            warn: Channel::new(Level::Warning, config),
            inf: Channel::new(Level::Info, config),
            deb: Channel::new(Level::Debug, config),
        }
    }

    /// Current visibility threshold.
    pub fn threshold(&self) -> Level {
        *self.threshold.read().unwrap()
    }

    /// Sets the visibility threshold.
    pub fn set_threshold(&self, threshold: Level) {
        *self.threshold.write().unwrap() = threshold;
    }

    /// Sets the threshold by level name, case-insensitively. Unrecognized
    /// names resolve to [`Level::Error`] (rank 0), which mutes every tier
    /// but Error.
    pub fn set_threshold_by_name(&self, name: &str) {
        self.set_threshold(Level::from_name(name));
    }

    pub(crate) fn emits(&self, tier: Level) -> bool {
        tier <= self.threshold()
    }

    /// Logs `err` on the error channel, then panics with its message.
    ///
    /// Error-tier messages are never filtered (rank 0 passes every
    /// threshold) and this call never returns; callers must treat it as
    /// fatal. Use [`write_error`](Logger::write_error) to log an error
    /// without aborting.
    ///
    /// ```should_panic
    /// let logger = mlog::Logger::new();
    /// logger.error(&std::io::Error::other("connection lost"));
    /// ```
    #[track_caller]
    pub fn error(&self, err: &dyn Error) -> ! {
        self.write_error(err);
        panic!("{err}");
    }

    /// The emit half of [`error`](Logger::error): logs `err` on the error
    /// channel and returns.
    #[track_caller]
    pub fn write_error(&self, err: &dyn Error) {
        let caller = Location::caller();
        self.emit_at(Level::Error, caller.file(), caller.line(), format_args!("{err}"));
    }

    /// Logs on the warning channel when the threshold permits. Prefer the
    /// [`warning!`](crate::warning) macro for printf-style call sites.
    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        let caller = Location::caller();
        self.emit_at(Level::Warning, caller.file(), caller.line(), args);
    }

    /// Logs on the info channel when the threshold permits.
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        let caller = Location::caller();
        self.emit_at(Level::Info, caller.file(), caller.line(), args);
    }

    /// Logs on the debug channel when the threshold permits.
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        let caller = Location::caller();
        self.emit_at(Level::Debug, caller.file(), caller.line(), args);
    }

    pub(crate) fn emit_at(&self, tier: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
        if !self.emits(tier) {
            return;
        }
        self.channel(tier).emit(file, line, args);
    }

    pub(crate) fn flush_sinks(&self) {
        for channel in [&self.err, &self.warn, &self.inf, &self.deb] {
            channel.flush();
        }
    }

    fn channel(&self, tier: Level) -> &Channel {
        match tier {
            Level::Error => &self.err,
            Level::Warning => &self.warn,
            Level::Info => &self.inf,
            Level::Debug => &self.deb,
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
