use std::sync::atomic::{AtomicBool, Ordering};

use crate::log_level::LogLevel;

/// Per-severity enable switches, recomputed in bulk from a single verbosity
/// value.
///
/// Every log call site checks [`enabled`](Self::enabled) before doing any
/// formatting work, so the query is a plain relaxed atomic load. The switches
/// are only written during reconfiguration; a call site observing a slightly
/// stale decision is acceptable.
pub struct LevelGate {
    switches: [AtomicBool; 5],
}

impl LevelGate {
    const fn new() -> Self {
        Self {
            switches: [const { AtomicBool::new(false) }; 5],
        }
    }

    /// Recomputes all five switches from scratch.
    ///
    /// A severity is enabled iff `verbosity` reaches its threshold: error at
    /// 1, warn at 2, info at 3, debug at 4, trace at 5. Zero disables
    /// everything; values above 5 behave like 5.
    pub fn apply(&self, verbosity: u8) {
        for level in LogLevel::ALL {
            self.switches[level.index()].store(verbosity >= level.threshold(), Ordering::Relaxed);
        }
    }

    /// Whether lines of the given severity are currently observable.
    #[inline]
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.switches[level.index()].load(Ordering::Relaxed)
    }
}

static GATE: LevelGate = LevelGate::new();

/// The process-wide gate shared by all severity streams.
///
/// Independent of the sink lifecycle: [`cleanup`](crate::facility::cleanup)
/// does not touch it.
#[must_use]
pub fn gate() -> &'static LevelGate {
    &GATE
}
