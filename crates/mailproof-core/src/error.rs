use thiserror::Error;

/// Result type alias for mailproof operations
pub type Result<T> = std::result::Result<T, MailproofError>;

/// Errors that can occur when scanning a domain
#[derive(Error, Debug)]
pub enum MailproofError {
    /// Input failed domain-syntax validation
    #[error("invalid domain '{domain}': {reason}")]
    InvalidDomain {
        /// The rejected input, as received (trimmed)
        domain: String,
        /// Why validation rejected it
        reason: String,
    },

    /// DNS resolution failed
    #[error("DNS resolution failed: {0}")]
    Dns(String),

    /// Lookup exceeded the configured deadline
    #[error("lookup timed out after {0} seconds")]
    Timeout(u64),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server error (bind, listen, shutdown)
    #[error("server error: {0}")]
    Server(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl MailproofError {
    /// Returns true if the error was caused by the caller's input
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidDomain { .. })
    }

    /// Returns true if the error is transient and worth retrying
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Dns(_) | Self::Timeout(_))
    }

    /// Convenience constructor for validation failures
    #[must_use]
    pub fn invalid_domain(domain: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDomain {
            domain: domain.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_domain_is_input_error() {
        let err = MailproofError::invalid_domain("bad input", "contains spaces");
        assert!(err.is_input_error());
        assert!(!err.is_retryable());
    }

    #[test]
    fn dns_errors_are_retryable() {
        assert!(MailproofError::Dns("servfail".into()).is_retryable());
        assert!(MailproofError::Timeout(5).is_retryable());
        assert!(!MailproofError::Config("bad listen addr".into()).is_retryable());
    }

    #[test]
    fn display_includes_reason() {
        let err = MailproofError::invalid_domain("foo bar", "contains spaces");
        assert_eq!(err.to_string(), "invalid domain 'foo bar': contains spaces");
    }
}
