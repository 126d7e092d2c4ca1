//! Leveled line macros that check the gate before evaluating arguments.
//!
//! Each macro tests `enabled()` first, so a disabled severity pays neither
//! formatting nor allocation cost. The formatted text becomes one complete
//! line: stamped, appended, terminated.

#[macro_export]
macro_rules! trace_line {
    ($($arg:tt)*) => {{
        let stream = $crate::stream::trace();
        if stream.enabled() {
            stream.append(format_args!($($arg)*)).endl();
        }
    }};
}

#[macro_export]
macro_rules! debug_line {
    ($($arg:tt)*) => {{
        let stream = $crate::stream::debug();
        if stream.enabled() {
            stream.append(format_args!($($arg)*)).endl();
        }
    }};
}

#[macro_export]
macro_rules! info_line {
    ($($arg:tt)*) => {{
        let stream = $crate::stream::info();
        if stream.enabled() {
            stream.append(format_args!($($arg)*)).endl();
        }
    }};
}

#[macro_export]
macro_rules! warn_line {
    ($($arg:tt)*) => {{
        let stream = $crate::stream::warn();
        if stream.enabled() {
            stream.append(format_args!($($arg)*)).endl();
        }
    }};
}

#[macro_export]
macro_rules! error_line {
    ($($arg:tt)*) => {{
        let stream = $crate::stream::error();
        if stream.enabled() {
            stream.append(format_args!($($arg)*)).endl();
        }
    }};
}

/// Logs a contract violation at error severity, then panics with the same
/// message.
#[macro_export]
macro_rules! assert_log {
    ($cond:expr) => {{
        if !$cond {
            let message = format!(
                "assert failed at {} line {}: {}",
                file!(),
                line!(),
                stringify!($cond)
            );
            $crate::stream::error().append(&message).endl();
            panic!("{message}");
        }
    }};
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use crate::facility;
    use crate::test_support::global_state_lock;
    use std::fs;

    #[test]
    fn line_macros_format_and_terminate_in_one_call() {
        let _guard = global_state_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("macros.log");
        facility::setup(&path.to_string_lossy(), false, 5);

        info_line!("peer {} connected on port {}", "alpha", 9000);
        warn_line!("{} retries left", 2);

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(":I:peer alpha connected on port 9000"));
        assert!(lines[1].ends_with(":W:2 retries left"));

        facility::set_level(0);
        facility::cleanup();
    }

    #[test]
    fn disabled_macro_does_not_evaluate_its_arguments() {
        let _guard = global_state_lock();
        facility::set_level(0);

        let evaluated = std::cell::Cell::new(false);
        let probe = || {
            evaluated.set(true);
            7
        };
        trace_line!("{}", probe());
        assert!(!evaluated.get());

        facility::cleanup();
    }

    #[test]
    fn assert_log_passes_silently_on_true_conditions() {
        let _guard = global_state_lock();
        facility::set_level(1);
        assert_log!(1 + 1 == 2);
        facility::set_level(0);
        facility::cleanup();
    }

    #[test]
    fn assert_log_logs_and_panics_on_violation() {
        let _guard = global_state_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assert.log");
        facility::setup(&path.to_string_lossy(), false, 1);

        let outcome = std::panic::catch_unwind(|| {
            assert_log!(2 + 2 == 5);
        });
        assert!(outcome.is_err());

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("assert failed at"));
        assert!(contents.contains("2 + 2 == 5"));

        facility::set_level(0);
        facility::cleanup();
    }
}
