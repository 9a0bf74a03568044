//! Email sender provider contract consumed by the host system

use crate::config::SenderConfig;
use crate::error::Result;
use async_trait::async_trait;

/// Pluggable outbound email backend.
///
/// The host renders subject and bodies itself and calls [`send`] with a
/// per-call configuration; the provider submits exactly one message and
/// reports success or a typed failure.
///
/// [`send`]: EmailSenderProvider::send
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSenderProvider: Send + Sync {
    /// Send a single pre-rendered message to one recipient.
    async fn send(
        &self,
        config: &SenderConfig,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<()>;

    /// Teardown hook invoked at provider shutdown. The SES client holds no
    /// resources that need explicit release.
    fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_email_sender_provider() {
        let mut mock = MockEmailSenderProvider::new();

        mock.expect_send().returning(|_, _, _, _, _| Ok(()));
        mock.expect_close().returning(|| ());

        let config = SenderConfig::default();
        let result = mock
            .send(&config, "u@test.com", "Subject", "text", "<b>html</b>")
            .await;
        assert!(result.is_ok());

        mock.close();
    }
}
