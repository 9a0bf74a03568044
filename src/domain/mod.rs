//! Outbound email domain types and address construction

use lettre::message::Mailbox;
use lettre::Address;
use thiserror::Error;

/// Address construction failures
#[derive(Error, Debug)]
pub enum AddressError {
    #[error("Missing or blank email address")]
    Blank,

    #[error("Invalid email address: {0}")]
    Invalid(#[from] lettre::address::AddressError),
}

/// Combine an email address with an optional display name into a single
/// mailbox value.
///
/// A blank display name yields the bare address. The email string itself
/// must be non-blank and syntactically valid.
pub fn mailbox(email: &str, display_name: Option<&str>) -> Result<Mailbox, AddressError> {
    if email.trim().is_empty() {
        return Err(AddressError::Blank);
    }

    let address: Address = email.parse()?;

    let name = display_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from);

    Ok(Mailbox::new(name, address))
}

/// Fully rendered outbound message, one per send call.
///
/// `to` is the raw recipient string; `source` and `reply_to` carry the
/// already-encoded mailbox strings.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub to: String,
    pub source: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}
