//! Core logger types

pub mod composer;
pub mod config;
pub mod error;
pub mod logger;
pub mod meta;
pub mod payload;
pub mod style;
pub mod timer;
pub mod types;

pub use composer::compose;
pub use config::{Config, ConfigOverrides};
pub use error::{Result, SignetError};
pub use logger::{Logger, LoggerBuilder};
pub use meta::POINTER;
pub use payload::Payload;
pub use style::{StyleName, Styler};
pub use timer::{format_elapsed, TimerOptions, TimerStyle, TimerSummary, TimerText};
pub use types::{TypeDescriptor, TypeRegistry};
