//! Meta-token rendering
//!
//! The optional prefix fields preceding every message: date, timestamp,
//! caller-file basename, and scope, in that fixed order, each bracketed and
//! painted in the muted style. A pointer glyph closes the sequence whenever at
//! least one token rendered.

use super::config::Config;
use super::style::Styler;
use chrono::Local;
use std::panic::Location;

/// Separator glyph appended after a non-empty meta sequence.
pub const POINTER: &str = "›";

/// Render the meta tokens for one line.
///
/// Scope elements are trimmed and empty elements skipped; an empty scope
/// contributes nothing even when `display_scope` is set. A missing caller
/// file degrades silently to no token.
pub fn meta_tokens(
    config: &Config,
    scope: &[String],
    caller_file: Option<&str>,
    styler: &Styler,
) -> Vec<String> {
    let mut tokens = Vec::new();
    let now = Local::now();

    if config.display_date {
        tokens.push(styler.muted(&format!("[{}]", now.format("%Y-%m-%d"))));
    }

    if config.display_timestamp {
        tokens.push(styler.muted(&format!("[{}]", now.format("%H:%M:%S"))));
    }

    if config.display_filename {
        if let Some(file) = caller_file {
            tokens.push(styler.muted(&format!("[{}]", file)));
        }
    }

    if config.display_scope {
        for name in scope {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                tokens.push(styler.muted(&format!("[{}]", trimmed)));
            }
        }
    }

    if !tokens.is_empty() {
        tokens.push(styler.muted(POINTER));
    }

    tokens
}

/// Basename of the file a facade entry point was called from.
///
/// Rust-native replacement for stack walking: the facade methods are
/// `#[track_caller]` and hand their capture down here.
pub fn caller_basename(location: &'static Location<'static>) -> &'static str {
    let file = location.file();
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ConfigOverrides;

    fn plain() -> Styler {
        Styler::new(false)
    }

    fn config(overrides: ConfigOverrides) -> Config {
        Config::default().merged(&overrides)
    }

    #[test]
    fn test_all_flags_off_renders_nothing() {
        let config = config(ConfigOverrides::new().with_display_scope(false));
        let tokens = meta_tokens(&config, &["api".to_string()], Some("main.rs"), &plain());
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_scope_tokens_and_pointer() {
        let tokens = meta_tokens(
            &Config::default(),
            &["api".to_string(), "auth".to_string()],
            None,
            &plain(),
        );
        assert_eq!(tokens, vec!["[api]", "[auth]", POINTER]);
    }

    #[test]
    fn test_scope_elements_trimmed_and_empties_skipped() {
        let tokens = meta_tokens(
            &Config::default(),
            &["  api ".to_string(), "   ".to_string()],
            None,
            &plain(),
        );
        assert_eq!(tokens, vec!["[api]", POINTER]);
    }

    #[test]
    fn test_empty_scope_contributes_nothing() {
        let tokens = meta_tokens(&Config::default(), &[], None, &plain());
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_filename_requires_flag_and_value() {
        let with_flag = config(ConfigOverrides::new().with_display_filename(true));
        let tokens = meta_tokens(&with_flag, &[], Some("worker.rs"), &plain());
        assert_eq!(tokens, vec!["[worker.rs]", POINTER]);

        // Missing caller file degrades silently
        let tokens = meta_tokens(&with_flag, &[], None, &plain());
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_date_and_timestamp_shapes() {
        let config = config(
            ConfigOverrides::new()
                .with_display_date(true)
                .with_display_timestamp(true)
                .with_display_scope(false),
        );
        let tokens = meta_tokens(&config, &[], None, &plain());
        assert_eq!(tokens.len(), 3);
        // [YYYY-MM-DD]
        assert_eq!(tokens[0].len(), 12);
        // [HH:MM:SS]
        assert_eq!(tokens[1].len(), 10);
        assert_eq!(tokens[2], POINTER);
    }

    #[test]
    fn test_caller_basename() {
        let location = Location::caller();
        assert_eq!(caller_basename(location), "meta.rs");
    }
}
