//! Named timers and their report styling
//!
//! A small state machine: a label is either absent or running. `time` inserts
//! (or restarts) a record, `time_end` removes it and reports the elapsed
//! span. Both events render through the same composition machinery as regular
//! log lines; the per-logger start/end style overrides persist across calls
//! and are updated only via the layered merge in [`layer_styles`].

use super::style::StyleName;

/// Descriptive text carried by a timer style override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerText {
    Literal(String),
    /// Segments joined at render time; the join rule differs between the
    /// start and end reports.
    Segments(Vec<String>),
}

impl From<&str> for TimerText {
    fn from(text: &str) -> Self {
        TimerText::Literal(text.to_string())
    }
}

impl From<String> for TimerText {
    fn from(text: String) -> Self {
        TimerText::Literal(text)
    }
}

/// Optional overrides for one timer report (start or end).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerStyle {
    pub badge: Option<String>,
    pub color: Option<StyleName>,
    pub text: Option<TimerText>,
}

impl TimerStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: StyleName) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<TimerText>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Options accepted by `time()`.
///
/// `both` short-circuits: its set keys overlay both records and nothing else
/// applies. Otherwise `start`/`end` wholesale-replace their record first,
/// then every set top-level key overlays both records individually.
#[derive(Debug, Clone, Default)]
pub struct TimerOptions {
    pub both: Option<TimerStyle>,
    pub start: Option<TimerStyle>,
    pub end: Option<TimerStyle>,
    pub badge: Option<String>,
    pub color: Option<StyleName>,
    pub text: Option<TimerText>,
}

impl TimerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_both(mut self, style: TimerStyle) -> Self {
        self.both = Some(style);
        self
    }

    #[must_use]
    pub fn with_start(mut self, style: TimerStyle) -> Self {
        self.start = Some(style);
        self
    }

    #[must_use]
    pub fn with_end(mut self, style: TimerStyle) -> Self {
        self.end = Some(style);
        self
    }

    #[must_use]
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: StyleName) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<TimerText>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Result of a successful `time_end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSummary {
    pub label: String,
    pub elapsed_ms: i64,
}

/// Overlay `over`'s set keys onto `base`, returning the result.
fn overlay(base: &TimerStyle, over: &TimerStyle) -> TimerStyle {
    TimerStyle {
        badge: over.badge.clone().or_else(|| base.badge.clone()),
        color: over.color.or(base.color),
        text: over.text.clone().or_else(|| base.text.clone()),
    }
}

/// Apply `time()` options to the persisted start/end records.
///
/// Pure: returns the two new records instead of mutating shared state. The
/// layering order (wholesale assignment first, per-key overlay second) is
/// load-bearing and observable by callers.
pub(crate) fn layer_styles(
    start: &TimerStyle,
    end: &TimerStyle,
    options: &TimerOptions,
) -> (TimerStyle, TimerStyle) {
    if let Some(both) = &options.both {
        return (overlay(start, both), overlay(end, both));
    }

    let new_start = options.start.clone().unwrap_or_else(|| start.clone());
    let new_end = options.end.clone().unwrap_or_else(|| end.clone());

    let top_level = TimerStyle {
        badge: options.badge.clone(),
        color: options.color,
        text: options.text.clone(),
    };
    (overlay(&new_start, &top_level), overlay(&new_end, &top_level))
}

/// Format an elapsed span: `<n>ms` below one second, `<n.nn>s` otherwise.
pub fn format_elapsed(ms: i64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        format!("{:.2}s", ms as f64 / 1000.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TimerRecord {
    pub label: String,
    pub started_at_ms: i64,
}

/// Per-logger timer state: running records in insertion order plus the two
/// persisted style-override records.
#[derive(Debug, Default)]
pub(crate) struct TimerState {
    records: Vec<TimerRecord>,
    pub start_style: TimerStyle,
    pub end_style: TimerStyle,
}

impl TimerState {
    pub fn apply_options(&mut self, options: &TimerOptions) {
        let (start, end) = layer_styles(&self.start_style, &self.end_style, options);
        self.start_style = start;
        self.end_style = end;
    }

    /// Synthesized label for `time()` without one.
    ///
    /// Uses the current running-timer count, so labels are fresh on first use
    /// but NOT guaranteed unique once timers have been removed; callers who
    /// need strong uniqueness must supply their own labels.
    pub fn next_auto_label(&self) -> String {
        format!("timer_{}", self.records.len())
    }

    /// Insert a record, restarting (not repositioning) an existing label.
    pub fn insert(&mut self, label: &str, now_ms: i64) {
        if let Some(record) = self.records.iter_mut().find(|r| r.label == label) {
            record.started_at_ms = now_ms;
        } else {
            self.records.push(TimerRecord {
                label: label.to_string(),
                started_at_ms: now_ms,
            });
        }
    }

    /// Label picked by `time_end()` when called without one: the most
    /// recently inserted label containing `timer_`, i.e. auto-generated
    /// labels win over custom ones regardless of insertion order. When no
    /// such label exists nothing is selected; this asymmetry is a documented
    /// quirk, not a bug.
    pub fn select_default_label(&self) -> Option<String> {
        self.records
            .iter()
            .rev()
            .find(|r| r.label.contains("timer_"))
            .map(|r| r.label.clone())
    }

    pub fn remove(&mut self, label: &str) -> Option<TimerRecord> {
        let index = self.records.iter().position(|r| r.label == label)?;
        Some(self.records.remove(index))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.records.iter().any(|r| r.label == label)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_boundaries() {
        assert_eq!(format_elapsed(0), "0ms");
        assert_eq!(format_elapsed(999), "999ms");
        assert_eq!(format_elapsed(1000), "1.00s");
        assert_eq!(format_elapsed(2500), "2.50s");
        assert_eq!(format_elapsed(61_230), "61.23s");
    }

    #[test]
    fn test_auto_label_reflects_running_count() {
        let mut state = TimerState::default();
        assert_eq!(state.next_auto_label(), "timer_0");

        state.insert("timer_0", 0);
        assert_eq!(state.next_auto_label(), "timer_1");

        // Removal makes counts reusable: weak uniqueness by design
        state.remove("timer_0");
        assert_eq!(state.next_auto_label(), "timer_0");
    }

    #[test]
    fn test_insert_restarts_existing_label_in_place() {
        let mut state = TimerState::default();
        state.insert("build", 100);
        state.insert("upload", 200);
        state.insert("build", 300);

        assert_eq!(state.len(), 2);
        let record = state.remove("build").unwrap();
        assert_eq!(record.started_at_ms, 300);
    }

    #[test]
    fn test_default_label_prefers_auto_generated() {
        let mut state = TimerState::default();
        state.insert("timer_0", 0);
        state.insert("custom", 1);
        // Custom label inserted last, auto-generated still wins
        assert_eq!(state.select_default_label(), Some("timer_0".to_string()));

        state.remove("timer_0");
        assert_eq!(state.select_default_label(), None);
    }

    #[test]
    fn test_default_label_picks_most_recent_auto() {
        let mut state = TimerState::default();
        state.insert("timer_0", 0);
        state.insert("timer_1", 1);
        assert_eq!(state.select_default_label(), Some("timer_1".to_string()));
    }

    #[test]
    fn test_layer_both_short_circuits() {
        let start = TimerStyle::new().with_badge("s").with_color(StyleName::Green);
        let end = TimerStyle::new().with_badge("e");
        let options = TimerOptions::new()
            .with_both(TimerStyle::new().with_badge("*"))
            // Ignored when `both` is present
            .with_color(StyleName::Red)
            .with_start(TimerStyle::new().with_badge("x"));

        let (new_start, new_end) = layer_styles(&start, &end, &options);
        assert_eq!(new_start.badge.as_deref(), Some("*"));
        assert_eq!(new_end.badge.as_deref(), Some("*"));
        // Unset keys of `both` keep the prior record values
        assert_eq!(new_start.color, Some(StyleName::Green));
        assert_eq!(new_end.color, None);
    }

    #[test]
    fn test_layer_wholesale_then_per_key() {
        let start = TimerStyle::new()
            .with_badge("old")
            .with_text("old text");
        let end = TimerStyle::new();
        let options = TimerOptions::new()
            .with_start(TimerStyle::new().with_badge("replaced"))
            .with_color(StyleName::Magenta);

        let (new_start, new_end) = layer_styles(&start, &end, &options);
        // Wholesale replacement dropped the old text
        assert_eq!(new_start.text, None);
        assert_eq!(new_start.badge.as_deref(), Some("replaced"));
        // Per-key overlay applies to both records
        assert_eq!(new_start.color, Some(StyleName::Magenta));
        assert_eq!(new_end.color, Some(StyleName::Magenta));
    }

    #[test]
    fn test_per_key_overrides_wholesale() {
        let options = TimerOptions::new()
            .with_end(TimerStyle::new().with_badge("wholesale"))
            .with_badge("per-key");
        let (_, new_end) = layer_styles(&TimerStyle::new(), &TimerStyle::new(), &options);
        assert_eq!(new_end.badge.as_deref(), Some("per-key"));
    }
}
