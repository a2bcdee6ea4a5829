//! Logger display configuration
//!
//! A [`Config`] holds the full set of boolean display toggles and is always
//! fully defined. Callers express partial intent through [`ConfigOverrides`],
//! which is merged over a base config with override-wins precedence. Both
//! types deserialize from camelCase JSON so host applications can discover
//! configuration from a file.

use serde::{Deserialize, Serialize};

/// Fully resolved display configuration.
///
/// Every field always has a defined value; the merge in
/// [`Config::merged`] is the only way overrides enter a config.
///
/// # Examples
///
/// ```
/// use signet_log::core::config::{Config, ConfigOverrides};
///
/// let overrides = ConfigOverrides::new().with_display_date(true);
/// let config = Config::default().merged(&overrides);
/// assert!(config.display_date);
/// assert!(config.display_badge);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub display_date: bool,
    pub display_timestamp: bool,
    pub display_filename: bool,
    pub display_scope: bool,
    pub display_badge: bool,
    pub display_label: bool,
    pub uppercase_label: bool,
    pub underline_prefix: bool,
    pub underline_label: bool,
    pub underline_message: bool,
    pub underline_suffix: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_date: false,
            display_timestamp: false,
            display_filename: false,
            display_scope: true,
            display_badge: true,
            display_label: true,
            uppercase_label: false,
            underline_prefix: false,
            underline_label: true,
            underline_message: false,
            underline_suffix: false,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `overrides` over this config, returning the result.
    ///
    /// Pure: an explicitly present override wins, everything else keeps the
    /// base value.
    #[must_use]
    pub fn merged(self, overrides: &ConfigOverrides) -> Config {
        Config {
            display_date: overrides.display_date.unwrap_or(self.display_date),
            display_timestamp: overrides.display_timestamp.unwrap_or(self.display_timestamp),
            display_filename: overrides.display_filename.unwrap_or(self.display_filename),
            display_scope: overrides.display_scope.unwrap_or(self.display_scope),
            display_badge: overrides.display_badge.unwrap_or(self.display_badge),
            display_label: overrides.display_label.unwrap_or(self.display_label),
            uppercase_label: overrides.uppercase_label.unwrap_or(self.uppercase_label),
            underline_prefix: overrides.underline_prefix.unwrap_or(self.underline_prefix),
            underline_label: overrides.underline_label.unwrap_or(self.underline_label),
            underline_message: overrides.underline_message.unwrap_or(self.underline_message),
            underline_suffix: overrides.underline_suffix.unwrap_or(self.underline_suffix),
        }
    }
}

/// Partial configuration supplied by callers.
///
/// `None` means "not explicitly present" and defers to the base config
/// during merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_date: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_timestamp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_filename: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_scope: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_badge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uppercase_label: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline_prefix: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline_label: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline_message: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline_suffix: Option<bool>,
}

impl ConfigOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_display_date(mut self, value: bool) -> Self {
        self.display_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_display_timestamp(mut self, value: bool) -> Self {
        self.display_timestamp = Some(value);
        self
    }

    #[must_use]
    pub fn with_display_filename(mut self, value: bool) -> Self {
        self.display_filename = Some(value);
        self
    }

    #[must_use]
    pub fn with_display_scope(mut self, value: bool) -> Self {
        self.display_scope = Some(value);
        self
    }

    #[must_use]
    pub fn with_display_badge(mut self, value: bool) -> Self {
        self.display_badge = Some(value);
        self
    }

    #[must_use]
    pub fn with_display_label(mut self, value: bool) -> Self {
        self.display_label = Some(value);
        self
    }

    #[must_use]
    pub fn with_uppercase_label(mut self, value: bool) -> Self {
        self.uppercase_label = Some(value);
        self
    }

    #[must_use]
    pub fn with_underline_prefix(mut self, value: bool) -> Self {
        self.underline_prefix = Some(value);
        self
    }

    #[must_use]
    pub fn with_underline_label(mut self, value: bool) -> Self {
        self.underline_label = Some(value);
        self
    }

    #[must_use]
    pub fn with_underline_message(mut self, value: bool) -> Self {
        self.underline_message = Some(value);
        self
    }

    #[must_use]
    pub fn with_underline_suffix(mut self, value: bool) -> Self {
        self.underline_suffix = Some(value);
        self
    }
}
