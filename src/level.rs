//! Severity tiers and the fixed name table.

use std::fmt;

/// Severity tier, ordered from most (`Error = 0`) to least (`Debug = 3`)
/// severe. A message is emitted when its tier rank is at most the logger's
/// current threshold rank, so `Error` passes every threshold.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl Level {
    /// Resolves a level name, case-insensitively. Unrecognized names resolve
    /// to [`Level::Error`] (rank 0) rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "ERROR" => Level::Error,
            "WARNING" => Level::Warning,
            "INFO" => Level::Info,
            "DEBUG" => Level::Debug,
            _ => Level::Error,
        }
    }

    /// Upper-case level name.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    /// Tag prefix carried by this tier's channel.
    pub(crate) fn tag(self) -> &'static str {
        match self {
            Level::Error => "[ERROR]: ",
            Level::Warning => "[WARNING]: ",
            Level::Info => "[INFO]: ",
            Level::Debug => "[DEBUG]: ",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(Level::Error < Level::Warning);
        assert!(Level::Warning < Level::Info);
        assert!(Level::Info < Level::Debug);
        assert_eq!(Level::Error as u8, 0);
        assert_eq!(Level::Debug as u8, 3);
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Level::from_name("info"), Level::Info);
        assert_eq!(Level::from_name("INFO"), Level::Info);
        assert_eq!(Level::from_name("InFo"), Level::Info);
        assert_eq!(Level::from_name("error"), Level::Error);
        assert_eq!(Level::from_name("Warning"), Level::Warning);
        assert_eq!(Level::from_name("debug"), Level::Debug);
    }

    #[test]
    fn test_from_name_falls_back_to_error() {
        assert_eq!(Level::from_name("bogus"), Level::Error);
        assert_eq!(Level::from_name(""), Level::Error);
        assert_eq!(Level::from_name("warn"), Level::Error);
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Level::Warning.to_string(), "WARNING");
        assert_eq!(Level::Info.as_str(), "INFO");
    }
}
