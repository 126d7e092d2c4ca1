use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// The single process-wide output target.
///
/// A `Sink` owns a configured file path and a console toggle and serializes
/// every write across threads behind one mutex. The file is opened for append
/// on each write and closed again before the lock is released; no handle is
/// ever held between writes.
///
/// I/O failures are never surfaced to callers: an open or write failure
/// disables file output, emits one diagnostic on the error channel, and the
/// sink keeps serving console output (or goes silent if the console is off
/// too). Only a fresh [`configure`](Self::configure) with a non-empty path
/// re-arms file output.
pub struct Sink {
    state: Mutex<SinkState>,
}

struct SinkState {
    file_name: String,
    file_output: bool,
    console_output: bool,
    console: Box<dyn Write + Send>,
}

/// A failed file operation, named in the one-shot diagnostic.
enum WriteFailure {
    Open(String, io::Error),
    Write(String, io::Error),
    Remove(String, io::Error),
}

impl fmt::Display for WriteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteFailure::Open(name, e) => {
                write!(f, "Failed to open log file '{name}': {e}. Logging to file disabled.")
            }
            WriteFailure::Write(name, e) => {
                write!(f, "Failed to write log file '{name}': {e}. Logging to file disabled.")
            }
            WriteFailure::Remove(name, e) => {
                write!(f, "Failed to remove log file '{name}': {e}.")
            }
        }
    }
}

static INSTANCE: Mutex<Option<Arc<Sink>>> = Mutex::new(None);

impl Sink {
    fn new() -> Self {
        Self {
            state: Mutex::new(SinkState {
                file_name: String::new(),
                file_output: false,
                console_output: false,
                console: Box::new(io::stdout()),
            }),
        }
    }

    /// Returns the process-wide instance, creating it on first access.
    ///
    /// The fresh instance has no file target and the console off.
    #[must_use]
    pub fn instance() -> Arc<Self> {
        let mut slot = INSTANCE.lock();
        slot.get_or_insert_with(|| Arc::new(Self::new())).clone()
    }

    /// Releases the process-wide instance.
    ///
    /// The next [`instance`](Self::instance) call recreates a default-state
    /// sink.
    pub fn destroy() {
        INSTANCE.lock().take();
    }

    /// Sets the target file path and the console toggle.
    ///
    /// File output is armed iff the path is non-empty; any earlier failure
    /// latch is cleared. The file itself is not opened here; opening is
    /// deferred to the first write.
    pub fn configure(&self, file_name: &str, console_output: bool) {
        let mut state = self.state.lock();
        state.file_name = file_name.to_string();
        state.file_output = !state.file_name.is_empty();
        state.console_output = console_output;
    }

    pub fn set_console_output(&self, value: bool) {
        self.state.lock().console_output = value;
    }

    #[must_use]
    pub fn console_output(&self) -> bool {
        self.state.lock().console_output
    }

    #[must_use]
    pub fn file_output(&self) -> bool {
        self.state.lock().file_output
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        self.state.lock().file_name.clone()
    }

    /// Writes one finished record to the enabled targets.
    ///
    /// The console receives the text verbatim and is flushed immediately. The
    /// file is opened for append (created if missing), written, flushed and
    /// closed within this call. A failing open or write latches file output
    /// off after emitting one diagnostic naming the path.
    pub fn write(&self, data: &str) {
        let mut state = self.state.lock();

        if state.console_output {
            let _ = state.console.write_all(data.as_bytes());
            let _ = state.console.flush();
        }

        if !state.file_output {
            return;
        }

        if let Err(failure) = append_record(&state.file_name, data) {
            state.file_output = false;
            eprintln!("{failure}");
        }
    }

    /// Deletes the configured file.
    ///
    /// A missing file or an unconfigured sink counts as success.
    pub fn truncate(&self) {
        let state = self.state.lock();
        if state.file_name.is_empty() {
            return;
        }
        if let Err(e) = fs::remove_file(&state.file_name) {
            if e.kind() != io::ErrorKind::NotFound {
                eprintln!("{}", WriteFailure::Remove(state.file_name.clone(), e));
            }
        }
    }

    #[cfg(test)]
    fn set_console_writer(&self, console: Box<dyn Write + Send>) {
        self.state.lock().console = console;
    }
}

/// Open-append-write-flush for one record; the handle is dropped (closed) on
/// return, success or not.
fn append_record(file_name: &str, data: &str) -> Result<(), WriteFailure> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_name)
        .map_err(|e| WriteFailure::Open(file_name.to_string(), e))?;
    file.write_all(data.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| WriteFailure::Write(file_name.to_string(), e))
}
