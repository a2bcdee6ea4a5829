//! # Signet Log
//!
//! A hackable console logger with badge/label kinds, scoped instances, and
//! named timers.
//!
//! ## Features
//!
//! - **Built-in kinds**: info, warn, error, success and a dozen more, each
//!   with its badge glyph and color; custom kinds shadow built-ins by name
//! - **Scopes**: derive per-subsystem loggers whose lines carry context tags
//! - **Named timers**: start/stop reports with elapsed spans, restylable per
//!   logger instance
//! - **Pluggable sinks**: console by default, in-memory for tests
//!
//! ## Quick start
//!
//! ```
//! use signet_log::prelude::*;
//!
//! let logger = Logger::new();
//! logger.success("Operation successful").unwrap();
//!
//! let scoped = logger.scope(["worker"]).unwrap();
//! scoped.info("Queue drained").unwrap();
//!
//! let label = logger.time(Some("build"), None).unwrap();
//! let summary = logger.time_end(Some(&label)).unwrap();
//! assert!(summary.is_some());
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Config, ConfigOverrides, Logger, LoggerBuilder, Payload, Result, SignetError, StyleName,
        TimerOptions, TimerStyle, TimerSummary, TimerText, TypeDescriptor, TypeRegistry,
    };
    pub use crate::sinks::{ConsoleSink, MemorySink, Sink};
}

pub use crate::core::{
    Config, ConfigOverrides, Logger, LoggerBuilder, Payload, Result, SignetError, StyleName,
    TimerOptions, TimerStyle, TimerSummary, TimerText, TypeDescriptor, TypeRegistry,
};
pub use crate::sinks::{ConsoleSink, MemorySink, Sink};
