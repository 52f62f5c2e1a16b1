//! `log` facade bridge: install a [`Logger`] as the global backend.

use log::{Metadata, Record, SetLoggerError};

use crate::{level::Level, logger::Logger};

/// Installs `logger` as the global [`log`] backend.
///
/// The facade's static max level opens fully; per-record filtering stays on
/// the logger's threshold, which remains adjustable afterwards. Fails if a
/// global logger is already installed.
pub fn init(logger: Logger) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(logger)).map(|()| log::set_max_level(log::LevelFilter::Trace))
}

fn tier_of(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.emits(tier_of(metadata.level()))
    }

    /// Routes a record through the matching channel. Error-level records go
    /// through the emit half only; the facade never aborts the process.
    fn log(&self, record: &Record<'_>) {
        self.emit_at(
            tier_of(record.level()),
            record.file().unwrap_or("???"),
            record.line().unwrap_or(0),
            format_args!("{}", record.args()),
        );
    }

    fn flush(&self) {
        self.flush_sinks();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{LineFormat, LogConfig},
        testutil::SharedBuf,
    };

    #[test]
    fn test_tier_mapping_folds_trace_into_debug() {
        assert_eq!(tier_of(log::Level::Error), Level::Error);
        assert_eq!(tier_of(log::Level::Warn), Level::Warning);
        assert_eq!(tier_of(log::Level::Info), Level::Info);
        assert_eq!(tier_of(log::Level::Debug), Level::Debug);
        assert_eq!(tier_of(log::Level::Trace), Level::Debug);
    }

    #[test]
    fn test_facade_routes_and_filters_records() {
        // set_boxed_logger only succeeds once per process; keep every facade
        // assertion in this test.
        let buf = SharedBuf::default();
        let logger = Logger::with_config(&LogConfig {
            threshold: Level::Info,
            output: buf.sink(),
            format: LineFormat::none(),
        });
        init(logger).unwrap();
        log::info!("via facade count={}", 5);
        log::debug!("below threshold");
        log::error!("does not abort");
        let content = buf.contents();
        assert!(content.contains("[INFO]: via facade count=5"), "{content:?}");
        assert!(!content.contains("below threshold"), "{content:?}");
        assert!(content.contains("[ERROR]: does not abort"), "{content:?}");
    }
}
