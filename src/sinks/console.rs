//! Console sink implementation

use super::Sink;
use crate::core::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Stdout,
    Stderr,
}

/// Sink writing to the process's standard streams.
///
/// Defaults to stderr, keeping log output separable from program output.
pub struct ConsoleSink {
    target: Target,
}

impl ConsoleSink {
    pub fn stderr() -> Self {
        Self {
            target: Target::Stderr,
        }
    }

    pub fn stdout() -> Self {
        Self {
            target: Target::Stdout,
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        match self.target {
            Target::Stdout => writeln!(std::io::stdout().lock(), "{}", line)?,
            Target::Stderr => writeln!(std::io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            Target::Stdout => std::io::stdout().flush()?,
            Target::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_stderr() {
        let sink = ConsoleSink::default();
        assert_eq!(sink.target, Target::Stderr);
    }

    #[test]
    fn test_write_and_flush() {
        let mut sink = ConsoleSink::stderr();
        sink.write_line("console sink smoke test").unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.name(), "console");
    }
}
