//! The message-composition pipeline
//!
//! Turns a resolved kind descriptor plus a normalized payload into one styled
//! line. Stages append tokens in a fixed order: meta, prefix, badge, label,
//! message body, suffix; tokens are joined with single spaces and the line
//! carries no trailing newline. Kind resolution happens in the facade so an
//! unknown kind aborts before any token is built.

use super::config::Config;
use super::meta::meta_tokens;
use super::payload::Payload;
use super::style::{pad_end, Styler};
use super::types::TypeDescriptor;

/// Compose one fully formatted line.
///
/// `longest_label` is the registry-wide maximum label length, used to align
/// the label column across kinds.
pub fn compose(
    descriptor: &TypeDescriptor,
    payload: &Payload,
    config: &Config,
    scope: &[String],
    caller_file: Option<&str>,
    longest_label: usize,
    styler: &Styler,
) -> String {
    let mut tokens = meta_tokens(config, scope, caller_file, styler);

    let (prefix, suffix) = match payload {
        Payload::Structured { prefix, suffix, .. } => (prefix.as_deref(), suffix.as_deref()),
        _ => (None, None),
    };

    if let Some(prefix) = prefix {
        tokens.push(if config.underline_prefix {
            styler.underline(prefix)
        } else {
            prefix.to_string()
        });
    }

    if config.display_badge && !descriptor.badge.is_empty() {
        let width = descriptor.badge.chars().count() + 1;
        tokens.push(styler.paint(descriptor.color, &pad_end(&descriptor.badge, width)));
    }

    if config.display_label && !descriptor.label.is_empty() {
        let label = if config.uppercase_label {
            descriptor.label.to_uppercase()
        } else {
            descriptor.label.clone()
        };
        if config.underline_label {
            // Pad the styled string: the wider column absorbs the escape
            // sequences when styling is active, and widens the gap when it
            // is not. Intentional asymmetry with the plain branch.
            let styled = styler.paint_underline(descriptor.color, &label);
            tokens.push(pad_end(&styled, longest_label + 20));
        } else {
            tokens.push(styler.paint(descriptor.color, &pad_end(&label, longest_label + 1)));
        }
    }

    match payload {
        Payload::Text(message) | Payload::Structured { message, .. } => {
            tokens.push(if config.underline_message {
                styler.underline(message)
            } else {
                message.clone()
            });
        }
        Payload::Failure { summary, trace } => {
            tokens.push(if config.underline_message {
                styler.underline(summary)
            } else {
                summary.clone()
            });
            if !trace.is_empty() {
                let joined: String = trace.iter().map(|line| format!("\n{}", line)).collect();
                tokens.push(styler.muted(&joined));
            }
        }
    }

    if let Some(suffix) = suffix {
        tokens.push(if config.underline_suffix {
            styler.underline(suffix)
        } else {
            suffix.to_string()
        });
    }

    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ConfigOverrides;
    use crate::core::style::StyleName;

    fn info() -> TypeDescriptor {
        TypeDescriptor::new("info", "info", "ℹ", StyleName::Blue)
    }

    fn plain() -> Styler {
        Styler::new(false)
    }

    fn compose_plain(descriptor: &TypeDescriptor, payload: &Payload, config: &Config) -> String {
        compose(descriptor, payload, config, &[], None, 8, &plain())
    }

    #[test]
    fn test_line_contains_message() {
        let line = compose_plain(
            &info(),
            &Payload::text("server started"),
            &Config::default(),
        );
        assert!(line.contains("server started"));
        assert!(line.contains("ℹ"));
        assert!(line.contains("info"));
    }

    #[test]
    fn test_badge_suppressed_by_config() {
        let config = Config::default().merged(&ConfigOverrides::new().with_display_badge(false));
        let line = compose_plain(&info(), &Payload::text("hi"), &config);
        assert!(!line.contains("ℹ"));
        assert!(line.contains("info"));
    }

    #[test]
    fn test_label_suppressed_by_config() {
        let config = Config::default().merged(&ConfigOverrides::new().with_display_label(false));
        let line = compose_plain(&info(), &Payload::text("hi"), &config);
        assert!(!line.contains("info"));
        assert!(line.contains("ℹ"));
    }

    #[test]
    fn test_uppercase_label() {
        let config = Config::default().merged(&ConfigOverrides::new().with_uppercase_label(true));
        let line = compose_plain(&info(), &Payload::text("hi"), &config);
        assert!(line.contains("INFO"));
    }

    #[test]
    fn test_plain_label_column_width() {
        let config = Config::default().merged(&ConfigOverrides::new().with_underline_label(false));
        let line = compose_plain(&info(), &Payload::text("hi"), &config);
        // Plain labels pad to longest-label + 1 ("info" + 5 spaces for width 9)
        assert!(line.contains("info     "));
    }

    #[test]
    fn test_underlined_label_column_width() {
        // With styling disabled the underline branch still pads to the wider
        // column, so the visual gap is preserved
        let line = compose_plain(&info(), &Payload::text("hi"), &Config::default());
        assert!(line.contains(&format!("info{}", " ".repeat(24))));
    }

    #[test]
    fn test_structured_prefix_and_suffix_order() {
        let payload = Payload::structured(
            "deployed",
            Some("[ci]".to_string()),
            Some("(3s)".to_string()),
        );
        let line = compose_plain(&info(), &payload, &Config::default());

        let prefix_at = line.find("[ci]").expect("prefix rendered");
        let message_at = line.find("deployed").expect("message rendered");
        let suffix_at = line.find("(3s)").expect("suffix rendered");
        assert!(prefix_at < message_at && message_at < suffix_at);
    }

    #[test]
    fn test_failure_payload_renders_trace_below_summary() {
        let payload = Payload::Failure {
            summary: "boom: disk full".to_string(),
            trace: vec![
                "    caused by: write failed".to_string(),
                "    caused by: device out of space".to_string(),
            ],
        };
        let error_kind = TypeDescriptor::new("error", "error", "✖", StyleName::Red);
        let line = compose_plain(&error_kind, &payload, &Config::default());

        assert!(line.contains("boom: disk full"));
        assert!(line.contains("\n    caused by: write failed"));
        assert!(line.contains("\n    caused by: device out of space"));
        // Summary stays on the first line
        assert!(line.lines().next().unwrap().contains("boom: disk full"));
    }

    #[test]
    fn test_badgeless_labelless_kind_renders_bare_message() {
        let log_kind = TypeDescriptor::new("log", "", "", StyleName::White);
        let line = compose_plain(&log_kind, &Payload::text("just text"), &Config::default());
        assert_eq!(line, "just text");
    }

    #[test]
    fn test_meta_precedes_everything() {
        let line = compose(
            &info(),
            &Payload::text("hi"),
            &Config::default(),
            &["api".to_string()],
            None,
            8,
            &plain(),
        );
        assert!(line.starts_with("[api] ›"));
    }
}
