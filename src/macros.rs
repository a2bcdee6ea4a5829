//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each expands to
//! the matching facade method and evaluates to its `Result`.
//!
//! # Examples
//!
//! ```
//! use signet_log::prelude::*;
//! use signet_log::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! ```

/// Log a message under any registered kind with automatic formatting.
///
/// # Examples
///
/// ```
/// # use signet_log::prelude::*;
/// # let logger = Logger::new();
/// use signet_log::log;
/// log!(logger, "note", "Simple message").unwrap();
/// log!(logger, "error", "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $kind:expr, $($arg:tt)+) => {
        $logger.log($kind, format!($($arg)+))
    };
}

/// Log an info-kind message.
///
/// # Examples
///
/// ```
/// # use signet_log::prelude::*;
/// # let logger = Logger::new();
/// use signet_log::info;
/// info!(logger, "Listening on {}", 8080).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format!($($arg)+))
    };
}

/// Log a success-kind message.
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {
        $logger.success(format!($($arg)+))
    };
}

/// Log a warn-kind message.
///
/// # Examples
///
/// ```
/// # use signet_log::prelude::*;
/// # let logger = Logger::new();
/// use signet_log::warn;
/// warn!(logger, "Disk usage at {}%", 92).unwrap();
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format!($($arg)+))
    };
}

/// Log an error-kind message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format!($($arg)+))
    };
}

/// Log a debug-kind message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Logger;
    use crate::sinks::MemorySink;

    #[test]
    fn test_macros_format_and_route() {
        let sink = MemorySink::new();
        let buffer = sink.buffer();
        let logger = Logger::builder()
            .with_sink(Box::new(sink))
            .with_colors(false)
            .build();

        info!(logger, "up on port {}", 8080).unwrap();
        warn!(logger, "slow query: {}ms", 2500).unwrap();
        log!(logger, "star", "{} stars", 3).unwrap();

        let lines = buffer.lock();
        assert!(lines[0].contains("up on port 8080"));
        assert!(lines[1].contains("slow query: 2500ms"));
        assert!(lines[2].contains("3 stars"));
    }

    #[test]
    fn test_log_macro_unknown_kind_fails() {
        let logger = Logger::builder()
            .with_sink(Box::new(MemorySink::new()))
            .build();
        assert!(log!(logger, "verbose", "nope").is_err());
    }
}
