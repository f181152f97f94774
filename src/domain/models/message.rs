/// Messages the register command can send to a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    UsageRegister,
    PasswordMatchError,
    IncompleteEmailSettings,
    InvalidEmail,
}

impl MessageKey {
    pub const ALL: [MessageKey; 4] = [
        MessageKey::UsageRegister,
        MessageKey::PasswordMatchError,
        MessageKey::IncompleteEmailSettings,
        MessageKey::InvalidEmail,
    ];

    /// Stable identifier, used in logs
    pub fn key(self) -> &'static str {
        match self {
            MessageKey::UsageRegister => "registration.usage",
            MessageKey::PasswordMatchError => "password.match_error",
            MessageKey::IncompleteEmailSettings => "email.incomplete_settings",
            MessageKey::InvalidEmail => "email.invalid",
        }
    }
}
