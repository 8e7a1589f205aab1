//! Error types for ssh-wrap

use thiserror::Error;

/// Errors raised while resolving remote-execution configuration.
///
/// These are the only failure modes in the crate: command wrapping itself is
/// total (quoting is defined for every string), and a configured key file
/// that is missing locally is a logged warning, not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Remote mode was enabled without a username
    #[error("SSH_WRAP_USER is required when remote execution is enabled")]
    MissingUser,

    /// Remote mode was enabled without a host
    #[error("SSH_WRAP_HOST is required when remote execution is enabled")]
    MissingHost,
}

/// Result type alias using ConfigError
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(ConfigError::MissingUser.to_string().contains("SSH_WRAP_USER"));
        assert!(ConfigError::MissingHost.to_string().contains("SSH_WRAP_HOST"));
    }
}
