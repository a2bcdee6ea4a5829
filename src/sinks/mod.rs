//! Output sinks for composed lines

pub mod console;
pub mod memory;

pub use console::ConsoleSink;
pub use memory::MemorySink;

use crate::core::error::Result;

/// A destination accepting one composed line at a time.
///
/// The line carries no trailing newline; the sink owns the newline concern.
pub trait Sink: Send {
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
