//! The user-facing transcript: an append-only log of script echo and
//! error lines.

use serde::{Deserialize, Serialize};

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// 1-based script line number the entry belongs to.
    pub line: u32,
    /// Echoed script text or a user-facing error message.
    pub message: String,
}

/// Append-only feed of `{line, message}` pairs.
///
/// The data model always records the real line number; only [`render`]
/// blanks a number equal to the previous entry's, to visually group
/// multiple messages from one line.
///
/// [`render`]: Transcript::render
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<LogEntry>,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry.
    pub fn push(&mut self, line: u32, message: &str) {
        self.entries.push(LogEntry {
            line,
            message: message.to_string(),
        });
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The recorded entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Whether nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the entries to JSON, for external log sinks.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }

    /// Render for display, suppressing a line number identical to the
    /// previously rendered one.
    #[must_use]
    pub fn render(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        let mut previous: Option<u32> = None;
        for entry in &self.entries {
            if previous == Some(entry.line) {
                let _ = writeln!(out, "{:>4}  {}", "", entry.message);
            } else {
                let _ = writeln!(out, "{:>4}  {}", entry.line, entry.message);
            }
            previous = Some(entry.line);
        }
        out
    }
}
