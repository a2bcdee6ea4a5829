//! Logger facade and builder
//!
//! Binds the type registry, configuration, scope, styler, and sink together
//! and exposes one entry point per built-in kind plus the generic
//! [`Logger::log`]. Timer reports route through the same composition
//! machinery as regular lines.

use super::composer::compose;
use super::config::{Config, ConfigOverrides};
use super::error::{Result, SignetError};
use super::meta::{caller_basename, meta_tokens};
use super::payload::Payload;
use super::style::{pad_end, StyleName, Styler};
use super::timer::{format_elapsed, TimerOptions, TimerState, TimerSummary, TimerText};
use super::types::{TypeDescriptor, TypeRegistry};
use crate::sinks::{ConsoleSink, Sink};
use chrono::Utc;
use parking_lot::Mutex;
use std::panic::Location;
use std::sync::Arc;

const TIMER_START_TEXT: &str = "Initialized timer...";
const TIMER_END_TEXT: &str = "Timer run for:";

/// A configured logger instance.
///
/// Cheap to derive: [`Logger::scope`] produces a new instance sharing the
/// sink but carrying its own scope and timer state.
///
/// # Examples
///
/// ```
/// use signet_log::prelude::*;
///
/// let logger = Logger::new();
/// logger.success("Operation successful").unwrap();
/// logger.warn("Disk space low").unwrap();
///
/// let scoped = logger.scope(["worker", "emails"]).unwrap();
/// scoped.info("Queue drained").unwrap();
/// ```
pub struct Logger {
    registry: TypeRegistry,
    defaults: Config,
    config: Config,
    scope: Vec<String>,
    styler: Styler,
    sink: Arc<Mutex<Box<dyn Sink>>>,
    timers: Mutex<TimerState>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("scope", &self.scope)
            .field("sink", &self.sink.lock().name())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Logger`] instances.
pub struct LoggerBuilder {
    defaults: Config,
    overrides: ConfigOverrides,
    scope: Vec<String>,
    types: Vec<TypeDescriptor>,
    sink: Option<Box<dyn Sink>>,
    colors: bool,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            defaults: Config::default(),
            overrides: ConfigOverrides::default(),
            scope: Vec::new(),
            types: Vec::new(),
            sink: None,
            colors: true,
        }
    }

    /// Replace the package-level default configuration the instance re-merges
    /// against on [`Logger::set_config`].
    #[must_use]
    pub fn with_defaults(mut self, defaults: Config) -> Self {
        self.defaults = defaults;
        self
    }

    /// Per-instance configuration overrides, merged over the defaults.
    #[must_use]
    pub fn with_config(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    #[must_use]
    pub fn with_scope<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope = names.into_iter().map(Into::into).collect();
        self
    }

    /// Custom kinds, registered on top of the built-ins (same names shadow).
    #[must_use]
    pub fn with_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        self.types = types.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let mut registry = TypeRegistry::with_builtins();
        for descriptor in self.types {
            registry.register(descriptor);
        }
        let config = self.defaults.merged(&self.overrides);
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(ConsoleSink::default()));

        Logger {
            registry,
            defaults: self.defaults,
            config,
            scope: self.scope,
            styler: Styler::new(self.colors),
            sink: Arc::new(Mutex::new(sink)),
            timers: Mutex::new(TimerState::default()),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! kind_methods {
    ($($(#[$meta:meta])* $method:ident => $kind:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            #[track_caller]
            pub fn $method(&self, message: impl Into<String>) -> Result<()> {
                let caller = Location::caller();
                self.emit($kind, &Payload::Text(message.into()), Some(caller_basename(caller)))
            }
        )*
    };
}

impl Logger {
    /// Create a logger with defaults: built-in kinds, colors on, stderr sink.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Log a payload under any registered kind.
    ///
    /// Fails with `UnknownType` (producing no output) when the kind is not
    /// registered.
    #[track_caller]
    pub fn log(&self, type_name: &str, payload: impl Into<Payload>) -> Result<()> {
        let caller = Location::caller();
        self.emit(type_name, &payload.into(), Some(caller_basename(caller)))
    }

    /// Log an error value and its source chain under the `error` kind.
    #[track_caller]
    pub fn report(&self, err: &(dyn std::error::Error + 'static)) -> Result<()> {
        let caller = Location::caller();
        self.emit("error", &Payload::from_error(err), Some(caller_basename(caller)))
    }

    kind_methods! {
        /// Log under the bare `log` kind: no badge, no label.
        plain => "log",
        info => "info",
        success => "success",
        warn => "warn",
        error => "error",
        debug => "debug",
        fatal => "fatal",
        note => "note",
        pending => "pending",
        start => "start",
        pause => "pause",
        complete => "complete",
        star => "star",
        watch => "watch",
        awaiting => "await",
        fav => "fav",
    }

    fn emit(&self, type_name: &str, payload: &Payload, caller_file: Option<&str>) -> Result<()> {
        let descriptor = self.registry.resolve(type_name)?;
        let line = compose(
            descriptor,
            payload,
            &self.config,
            &self.scope,
            caller_file,
            self.registry.longest_label(),
            &self.styler,
        );
        self.write_line(&line)
    }

    fn write_line(&self, line: &str) -> Result<()> {
        self.sink.lock().write_line(line)
    }

    /// Flush the underlying sink.
    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    /// Derive a logger with the given scope, sharing this instance's sink.
    ///
    /// Fails with `NoScopeProvided` when called with zero names.
    pub fn scope<I, S>(&self, names: I) -> Result<Logger>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(SignetError::NoScopeProvided);
        }
        Ok(Logger {
            registry: self.registry.clone(),
            defaults: self.defaults,
            config: self.config,
            scope: names,
            styler: self.styler,
            sink: Arc::clone(&self.sink),
            timers: Mutex::new(TimerState::default()),
        })
    }

    /// Clear this instance's scope in place.
    pub fn unscope(&mut self) {
        self.scope.clear();
    }

    pub fn scope_names(&self) -> &[String] {
        &self.scope
    }

    /// Replace the configuration wholesale.
    ///
    /// Re-merges `overrides` over the defaults captured at construction, not
    /// over the prior instance config: replacement is not cumulative.
    pub fn set_config(&mut self, overrides: &ConfigOverrides) {
        self.config = self.defaults.merged(overrides);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start (or restart) a named timer and emit the start report.
    ///
    /// Without a label one is synthesized as `timer_<n>` from the running
    /// count; see [`TimerOptions`] for the style-override layering. Returns
    /// the effective label.
    #[track_caller]
    pub fn time(&self, label: Option<&str>, options: Option<&TimerOptions>) -> Result<String> {
        let caller = Location::caller();

        let (label, start_style) = {
            let mut timers = self.timers.lock();
            if let Some(options) = options {
                timers.apply_options(options);
            }
            let label = match label {
                Some(label) => label.to_string(),
                None => timers.next_auto_label(),
            };
            timers.insert(&label, Utc::now().timestamp_millis());
            (label, timers.start_style.clone())
        };

        let mut tokens = meta_tokens(
            &self.config,
            &self.scope,
            Some(caller_basename(caller)),
            &self.styler,
        );
        let badge = match &start_style.badge {
            Some(badge) => badge.clone(),
            None => self.registry.resolve("start")?.badge.clone(),
        };
        let color = start_style.color.unwrap_or(StyleName::Green);
        tokens.push(self.styler.paint(color, &pad_end(&badge, 4)));
        tokens.push(
            self.styler
                .underline(&pad_end(&label, self.registry.longest_label() + 22)),
        );
        tokens.push(match &start_style.text {
            Some(TimerText::Segments(parts)) => parts.join(" "),
            Some(TimerText::Literal(text)) => text.clone(),
            None => TIMER_START_TEXT.to_string(),
        });

        self.write_line(&tokens.join(" "))?;
        Ok(label)
    }

    /// Stop a named timer, emit the end report, and return the elapsed span.
    ///
    /// Without a label, picks the most recently started auto-generated timer
    /// (a label containing `timer_`); when only custom labels are running
    /// nothing is selected. A label that is not running is a no-op returning
    /// `None`.
    #[track_caller]
    pub fn time_end(&self, label: Option<&str>) -> Result<Option<TimerSummary>> {
        let caller = Location::caller();

        let (label, record, end_style) = {
            let mut timers = self.timers.lock();
            let label = match label {
                Some(label) => label.to_string(),
                None => match timers.select_default_label() {
                    Some(label) => label,
                    None => return Ok(None),
                },
            };
            let record = match timers.remove(&label) {
                Some(record) => record,
                None => return Ok(None),
            };
            (label, record, timers.end_style.clone())
        };

        let elapsed_ms = (Utc::now().timestamp_millis() - record.started_at_ms).max(0);
        let span = self
            .styler
            .paint(StyleName::Yellow, &format_elapsed(elapsed_ms));

        let mut tokens = meta_tokens(
            &self.config,
            &self.scope,
            Some(caller_basename(caller)),
            &self.styler,
        );
        let badge = match &end_style.badge {
            Some(badge) => badge.clone(),
            None => self.registry.resolve("pause")?.badge.clone(),
        };
        let color = end_style.color.unwrap_or(StyleName::Red);
        tokens.push(self.styler.paint(color, &pad_end(&badge, 4)));
        tokens.push(
            self.styler
                .underline(&pad_end(&label, self.registry.longest_label() + 22)),
        );
        tokens.push(match &end_style.text {
            // Join with a literal comma, then splice the span in place of the
            // first comma only. Inherited substitution rule; segments after
            // the second keep their commas.
            Some(TimerText::Segments(parts)) => parts
                .join(",")
                .replacen(',', &format!(" {} ", span), 1),
            Some(TimerText::Literal(text)) => format!("{} {}", text, span),
            None => format!("{} {}", TIMER_END_TEXT, span),
        });

        self.write_line(&tokens.join(" "))?;
        Ok(Some(TimerSummary { label, elapsed_ms }))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
