//! In-memory sink for tests and host-side inspection

use super::Sink;
use crate::core::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Sink capturing lines into a shared buffer.
///
/// Clone the buffer handle before handing the sink to a logger, then read
/// captured lines through the handle.
///
/// # Examples
///
/// ```
/// use signet_log::sinks::{MemorySink, Sink};
///
/// let mut sink = MemorySink::new();
/// let buffer = sink.buffer();
/// sink.write_line("captured").unwrap();
/// assert_eq!(buffer.lock().as_slice(), ["captured"]);
/// ```
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the captured lines.
    pub fn buffer(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.lines)
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_lines_in_order() {
        let mut sink = MemorySink::new();
        let buffer = sink.buffer();

        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();

        let lines = buffer.lock();
        assert_eq!(lines.as_slice(), ["first", "second"]);
    }
}
