//! AWS SES email sender provider for identity services
//!
//! This crate lets an identity server delegate outbound transactional
//! email (password resets, verification, etc.) to AWS SES v2 instead of
//! SMTP. The host renders subject and bodies; the provider submits them
//! as a single `SendEmail` call, optionally under per-call credentials.

pub mod config;
pub mod domain;
pub mod error;
pub mod provider;
pub mod ses;
pub mod transport;

// Re-export commonly used types
pub use config::SenderConfig;
pub use error::{EmailError, Result};
pub use provider::EmailSenderProvider;
pub use ses::SesEmailSenderProvider;
pub use transport::{CredentialsOverride, SesTransport, SesV2Transport};
