//! Error types for the logger

pub type Result<T> = std::result::Result<T, SignetError>;

#[derive(Debug, thiserror::Error)]
pub enum SignetError {
    /// Log kind not present in the type registry
    #[error("Unknown logger type '{name}'")]
    UnknownType { name: String },

    /// `scope()` called without any scope name
    #[error("Scope derivation requires at least one scope name")]
    NoScopeProvided,

    /// Structured payload without a usable message field
    #[error("Malformed structured payload: {reason}")]
    MalformedStructuredArgument { reason: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Sink failure with sink name
    #[error("Sink '{sink}' failed: {message}")]
    SinkError { sink: String, message: String },
}

impl SignetError {
    /// Create an unknown-type error
    pub fn unknown_type(name: impl Into<String>) -> Self {
        SignetError::UnknownType { name: name.into() }
    }

    /// Create a malformed-structured-payload error
    pub fn malformed(reason: impl Into<String>) -> Self {
        SignetError::MalformedStructuredArgument {
            reason: reason.into(),
        }
    }

    /// Create a sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        SignetError::SinkError {
            sink: sink.into(),
            message: message.into(),
        }
    }
}
