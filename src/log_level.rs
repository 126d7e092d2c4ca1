/// Defines the severity levels for log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Designates very fine-grained informational events.
    Trace,
    /// Designates fine-grained informational events that are most useful to debug an application.
    Debug,
    /// Designates informational messages that highlight the progress of the application at coarse-grained level.
    Info,
    /// Designates potentially harmful situations.
    Warn,
    /// Designates error events that might still allow the application to continue running.
    Error,
}

impl LogLevel {
    /// All severities, most verbose first.
    pub const ALL: [Self; 5] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
    ];

    /// The marker written into each line right after the timestamp.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Trace => ":T:",
            Self::Debug => ":D:",
            Self::Info => ":I:",
            Self::Warn => ":W:",
            Self::Error => ":E:",
        }
    }

    /// The verbosity value at which this severity becomes observable.
    #[must_use]
    pub const fn threshold(self) -> u8 {
        match self {
            Self::Trace => 5,
            Self::Debug => 4,
            Self::Info => 3,
            Self::Warn => 2,
            Self::Error => 1,
        }
    }

    /// Dense index into per-severity arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn tags_are_distinct_three_byte_markers() {
        let mut seen = Vec::new();
        for level in LogLevel::ALL {
            let tag = level.tag();
            assert_eq!(tag.len(), 3);
            assert!(tag.starts_with(':') && tag.ends_with(':'));
            assert!(!seen.contains(&tag), "duplicate tag {tag}");
            seen.push(tag);
        }
    }

    #[test]
    fn thresholds_run_from_trace_down_to_error() {
        assert_eq!(LogLevel::Trace.threshold(), 5);
        assert_eq!(LogLevel::Debug.threshold(), 4);
        assert_eq!(LogLevel::Info.threshold(), 3);
        assert_eq!(LogLevel::Warn.threshold(), 2);
        assert_eq!(LogLevel::Error.threshold(), 1);
    }

    #[test]
    fn indices_are_dense_and_match_all_order() {
        for (i, level) in LogLevel::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
        }
    }
}
