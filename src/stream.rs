use std::cell::RefCell;
use std::ffi::OsStr;
use std::fmt::{self, Write as _};
use std::mem;

use crate::gate::gate;
use crate::log_level::LogLevel;
use crate::sink::Sink;

/// One in-progress line for one severity on one thread.
struct Record {
    buf: String,
    has_data: bool,
}

impl Record {
    const EMPTY: Self = Self {
        buf: String::new(),
        has_data: false,
    };

    /// Writes the timestamp and severity tag once per line, on the first
    /// append after a flush.
    fn stamp(&mut self, level: LogLevel) {
        if self.has_data {
            return;
        }
        let now = chrono::Local::now();
        let _ = write!(
            self.buf,
            "{}{}",
            now.format("%Y-%m-%d %H:%M:%S%.6f"),
            level.tag()
        );
        self.has_data = true;
    }
}

thread_local! {
    // One slot per severity; lazily created with the thread, never shared.
    static RECORDS: RefCell<[Record; 5]> = const { RefCell::new([Record::EMPTY; 5]) };
}

/// A severity-tagged stream building one log line at a time.
///
/// Appends accumulate into a thread-local record, so concurrent writers on
/// different threads never see each other's partial lines; the only
/// cross-thread synchronization happens when [`endl`](Self::endl) hands the
/// finished line to the [`Sink`].
///
/// Every call checks the level gate first: while a severity is disabled,
/// appends do no formatting and no stamping at all.
pub struct LogStream {
    level: LogLevel,
}

impl LogStream {
    const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Whether this stream's severity is currently observable.
    #[inline]
    #[must_use]
    pub fn enabled(&self) -> bool {
        gate().enabled(self.level)
    }

    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Appends the value's `Display` rendering to the current line.
    ///
    /// The first append since the last flush stamps the line with the local
    /// timestamp and the severity tag. Returns `&self` for chaining.
    pub fn append<T: fmt::Display>(&self, value: T) -> &Self {
        if !self.enabled() {
            return self;
        }
        // Render before borrowing the record, in case the Display impl logs.
        let text = value.to_string();
        RECORDS.with(|records| {
            let mut records = records.borrow_mut();
            let record = &mut records[self.level.index()];
            record.stamp(self.level);
            record.buf.push_str(&text);
        });
        self
    }

    /// Appends platform text, replacing any non-UTF-8 units.
    pub fn append_lossy(&self, value: &OsStr) -> &Self {
        if !self.enabled() {
            return self;
        }
        self.append(value.to_string_lossy())
    }

    /// Terminates the current line and hands it to the sink.
    ///
    /// Appends the line terminator, snapshots the accumulated text, writes it
    /// through [`Sink::instance`], then resets the record so the next append
    /// starts a fresh stamped line.
    pub fn endl(&self) -> &Self {
        if !self.enabled() {
            return self;
        }
        let line = RECORDS.with(|records| {
            let mut records = records.borrow_mut();
            let record = &mut records[self.level.index()];
            record.stamp(self.level);
            record.buf.push('\n');
            record.has_data = false;
            mem::take(&mut record.buf)
        });
        Sink::instance().write(&line);
        self
    }
}

static TRACE: LogStream = LogStream::new(LogLevel::Trace);
static DEBUG: LogStream = LogStream::new(LogLevel::Debug);
static INFO: LogStream = LogStream::new(LogLevel::Info);
static WARN: LogStream = LogStream::new(LogLevel::Warn);
static ERROR: LogStream = LogStream::new(LogLevel::Error);

#[must_use]
pub fn trace() -> &'static LogStream {
    &TRACE
}

#[must_use]
pub fn debug() -> &'static LogStream {
    &DEBUG
}

#[must_use]
pub fn info() -> &'static LogStream {
    &INFO
}

#[must_use]
pub fn warn() -> &'static LogStream {
    &WARN
}

#[must_use]
pub fn error() -> &'static LogStream {
    &ERROR
}
