use std::io;

use crate::gate::gate;
use crate::sink::Sink;

/// Establishes the process-wide logging configuration.
///
/// Configures the sink (file target plus console toggle) and recomputes the
/// level gate for `verbosity`. Intended to be called once near process
/// start; a later call fully replaces both sink configuration and gate
/// state.
pub fn setup(file_name: &str, console_output: bool, verbosity: u8) {
    Sink::instance().configure(file_name, console_output);
    gate().apply(verbosity);
}

/// Re-applies only the level gate, leaving the sink untouched.
///
/// Lets verbosity change at runtime without reopening files.
pub fn set_level(verbosity: u8) {
    gate().apply(verbosity);
}

/// Deletes the configured log file, if any.
pub fn truncate() {
    Sink::instance().truncate();
}

/// Tears down the process-wide sink.
///
/// Gate state survives; any later logging call transparently recreates a
/// fresh default sink with no enabled outputs.
pub fn cleanup() {
    Sink::destroy();
}

/// The calling thread's last OS error, rendered as human-readable text.
#[must_use]
pub fn last_os_error() -> String {
    io::Error::last_os_error().to_string()
}
