//! Message payloads
//!
//! All caller-supplied arguments are normalized into a [`Payload`] at the API
//! boundary, so the compose pipeline never inspects argument shapes. A payload
//! is produced fresh per log call and never stored.

use super::error::{Result, SignetError};
use serde_json::Value;
use std::error::Error as StdError;

/// Normalized log-call argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Plain message text.
    Text(String),
    /// An error value: first-line summary plus trace lines from its source
    /// chain, rendered muted below the summary.
    Failure { summary: String, trace: Vec<String> },
    /// Message with optional prefix and suffix tokens carried separately.
    Structured {
        message: String,
        prefix: Option<String>,
        suffix: Option<String>,
    },
}

impl Payload {
    pub fn text(message: impl Into<String>) -> Self {
        Payload::Text(message.into())
    }

    /// Join multiple argument parts with single spaces into one text payload.
    pub fn joined<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = parts
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Payload::Text(joined)
    }

    pub fn structured(
        message: impl Into<String>,
        prefix: Option<String>,
        suffix: Option<String>,
    ) -> Self {
        Payload::Structured {
            message: message.into(),
            prefix,
            suffix,
        }
    }

    /// Build a failure payload from an error value and its source chain.
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let summary = err.to_string();
        let mut trace = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            trace.push(format!("    caused by: {}", cause));
            source = cause.source();
        }
        Payload::Failure { summary, trace }
    }

    /// Normalize a dynamic JSON value the way a single-argument log call is
    /// classified.
    ///
    /// An object is destructured expecting `message` with optional `prefix`
    /// and `suffix`; an object lacking a usable `message` fails with
    /// `MalformedStructuredArgument` rather than rendering a bogus value.
    /// Scalars and arrays become plain text.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Err(SignetError::malformed("payload is null")),
            Value::Object(fields) => {
                let message = match fields.get("message") {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    Some(Value::Bool(b)) => b.to_string(),
                    Some(Value::Null) | None => {
                        return Err(SignetError::malformed("missing message field"))
                    }
                    Some(other) => {
                        return Err(SignetError::malformed(format!(
                            "message field must be a scalar, got {}",
                            json_kind(other)
                        )))
                    }
                };
                let prefix = fields.get("prefix").and_then(Value::as_str).map(String::from);
                let suffix = fields.get("suffix").and_then(Value::as_str).map(String::from);
                Ok(Payload::Structured {
                    message,
                    prefix,
                    suffix,
                })
            }
            Value::String(s) => Ok(Payload::Text(s.clone())),
            other => Ok(Payload::Text(other.to_string())),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<&str> for Payload {
    fn from(message: &str) -> Self {
        Payload::Text(message.to_string())
    }
}

impl From<String> for Payload {
    fn from(message: String) -> Self {
        Payload::Text(message)
    }
}
