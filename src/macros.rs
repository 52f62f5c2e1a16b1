//! Printf-style front ends over the logger's tier methods. Each macro
//! forwards `format_args!`, so the caller's file and line end up in the
//! emitted line.

/// Logs on the warning channel: `warning!(logger, "fmt", args...)`.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(format_args!($($arg)+))
    };
}

/// Logs on the info channel: `info!(logger, "fmt", args...)`.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

/// Logs on the debug channel: `debug!(logger, "fmt", args...)`.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}
