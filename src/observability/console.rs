//! Console output sink.
//!
//! Every listener and every request shares one process-wide sink. A line is
//! written with a single locked call, so concurrent requests may interleave
//! whole lines but never tear one.

use std::io::Write;
use std::sync::Mutex;

/// Destination for echo console lines.
pub trait LogSink: Send + Sync {
    /// Write one line. A trailing newline is added by the sink.
    fn write_line(&self, line: &str);
}

/// Writes lines to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        // stdout going away (closed pipe) is not worth failing a request over.
        let _ = writeln!(stdout, "{line}");
        let _ = stdout.flush();
    }
}

/// Captures lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
    }
}
