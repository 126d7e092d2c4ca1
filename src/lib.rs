//! Linelog is a process-wide leveled logging facility.
//!
//! It provides five severity streams (trace, debug, info, warn, error) that
//! build one timestamped line at a time in per-thread buffers and hand each
//! finished line to a single shared sink, which writes it to the console,
//! a file, or both under one lock.
//!
//! The crate is structured into small modules, each responsible for one part
//! of the write path.
//!
//! ```no_run
//! linelog::setup("test.log", true, 3);
//! linelog::truncate();
//! linelog::info().append("listening on port ").append(9000).endl();
//! linelog::error_line!("startup failed: {}", linelog::last_os_error());
//! linelog::cleanup();
//! ```

/// Process-wide configuration entry points (`setup`, `set_level`, `truncate`, `cleanup`).
pub mod facility;
/// Per-severity enable switches recomputed from a single verbosity value.
pub mod gate;
/// Severity levels, their line tags and verbosity thresholds.
pub mod log_level;
/// Call-site macros that skip formatting while a severity is disabled.
pub mod macros;
/// The shared console/file output target.
pub mod sink;
/// Per-thread line accumulation and the five severity streams.
pub mod stream;

pub use facility::{cleanup, last_os_error, set_level, setup, truncate};
pub use gate::{LevelGate, gate};
pub use log_level::LogLevel;
pub use sink::Sink;
pub use stream::{LogStream, debug, error, info, trace, warn};
