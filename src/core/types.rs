//! Log kind descriptors and the type registry
//!
//! Every log line is composed from a [`TypeDescriptor`]: the badge glyph, the
//! label text, and the color the pair is painted in. Built-in kinds are
//! registered first; custom kinds registered at logger construction shadow
//! same-named built-ins. There is no removal operation.

use super::error::{Result, SignetError};
use super::style::StyleName;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display metadata for one log kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub label: String,
    pub badge: String,
    pub color: StyleName,
}

impl TypeDescriptor {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        badge: impl Into<String>,
        color: StyleName,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            badge: badge.into(),
            color,
        }
    }
}

/// Registry mapping kind names to their descriptors.
///
/// Tracks the longest registered label so the composer can align the label
/// column; the length is recomputed on every registration since overwrites
/// may shorten it.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, TypeDescriptor>,
    longest_label: usize,
}

impl TypeRegistry {
    /// Create a registry pre-populated with the built-in kinds.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self {
            types: HashMap::new(),
            longest_label: 0,
        };
        for descriptor in builtin_types() {
            registry.register(descriptor);
        }
        registry
    }

    /// Insert or overwrite a descriptor under its name.
    pub fn register(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.name.clone(), descriptor);
        self.longest_label = self
            .types
            .values()
            .map(|t| t.label.chars().count())
            .max()
            .unwrap_or(0);
    }

    /// Look up a descriptor, failing with `UnknownType` if absent.
    pub fn resolve(&self, name: &str) -> Result<&TypeDescriptor> {
        self.types
            .get(name)
            .ok_or_else(|| SignetError::unknown_type(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Longest label length in chars across all registered kinds.
    pub fn longest_label(&self) -> usize {
        self.longest_label
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// The built-in kind set, registered before any custom kinds.
///
/// The `log` kind deliberately has no badge and no label so it renders the
/// bare message.
fn builtin_types() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::new("await", "awaiting", "…", StyleName::Blue),
        TypeDescriptor::new("complete", "complete", "☒", StyleName::Cyan),
        TypeDescriptor::new("debug", "debug", "●", StyleName::Red),
        TypeDescriptor::new("error", "error", "✖", StyleName::Red),
        TypeDescriptor::new("fatal", "fatal", "✖", StyleName::Red),
        TypeDescriptor::new("fav", "favorite", "❤", StyleName::Magenta),
        TypeDescriptor::new("info", "info", "ℹ", StyleName::Blue),
        TypeDescriptor::new("log", "", "", StyleName::White),
        TypeDescriptor::new("note", "note", "●", StyleName::Blue),
        TypeDescriptor::new("pause", "pause", "■", StyleName::Yellow),
        TypeDescriptor::new("pending", "pending", "☐", StyleName::Magenta),
        TypeDescriptor::new("star", "star", "★", StyleName::Yellow),
        TypeDescriptor::new("start", "start", "▶", StyleName::Green),
        TypeDescriptor::new("success", "success", "✔", StyleName::Green),
        TypeDescriptor::new("warn", "warning", "⚠", StyleName::Yellow),
        TypeDescriptor::new("watch", "watching", "…", StyleName::Yellow),
    ]
}
