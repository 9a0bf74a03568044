//! Unified error handling for the SES email sender

use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, EmailError>;

/// Errors surfaced to the host system
#[derive(Error, Debug)]
pub enum EmailError {
    /// The sender configuration is incomplete. Raised before any remote
    /// call; never worth retrying without a config change.
    #[error("Invalid email configuration: {0}")]
    Configuration(String),

    /// The message could not be submitted to SES. Covers address
    /// construction as well as every remote failure (authentication,
    /// malformed request, network, throttling) without distinction.
    #[error("Failed to send email")]
    Send(#[source] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = EmailError::Configuration("missing or blank 'from' address".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid email configuration: missing or blank 'from' address"
        );
    }

    #[test]
    fn test_send_error_preserves_cause() {
        let cause = anyhow::anyhow!("connection reset by peer");
        let err = EmailError::Send(cause);

        let source = std::error::Error::source(&err).expect("send error carries a source");
        assert_eq!(source.to_string(), "connection reset by peer");
    }
}
