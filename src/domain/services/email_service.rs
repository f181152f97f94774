/// Checks whether an address may be used for an account
pub trait EmailValidator: Send + Sync {
    fn validate_email(&self, email: &str) -> bool;
}

/// Outgoing mail transport
pub trait MailService: Send + Sync {
    /// Whether every setting needed to send mail is present
    fn has_all_information(&self) -> bool;
}
