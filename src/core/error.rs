//! Error types for the logger system
//!
//! Log calls never return errors. These are surfaced by configuration,
//! setup and sink implementations only.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Syslog identity that cannot be handed to the OS
    #[error("Invalid log identity '{identity}': {message}")]
    InvalidIdentity { identity: String, message: String },

    /// Process-wide logger installed twice
    #[error("Global logger already initialized")]
    AlreadyInitialized,

    /// Sink write or flush failure
    #[error("Sink '{sink}' failed: {message}")]
    Sink { sink: String, message: String },
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn identity(identity: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidIdentity {
            identity: identity.into(),
            message: message.into(),
        }
    }

    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Sink {
            sink: sink.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("MODLOG_ENABLE", "Invalid module id: 'x'");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::sink("syslog", "closed");
        assert!(matches!(err, LoggerError::Sink { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("MODLOG_OUTPUT", "Invalid output mode: 'file'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for MODLOG_OUTPUT: Invalid output mode: 'file'"
        );

        let err = LoggerError::identity("a\0b", "contains NUL byte");
        assert_eq!(
            err.to_string(),
            "Invalid log identity 'a\0b': contains NUL byte"
        );

        assert_eq!(
            LoggerError::AlreadyInitialized.to_string(),
            "Global logger already initialized"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();
        assert!(err.to_string().contains("pipe closed"));
    }
}
