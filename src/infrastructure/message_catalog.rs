use std::collections::HashMap;

use crate::domain::{
    models::{message::MessageKey, player::CommandSender},
    services::messaging_service::Messenger,
};

/// English texts for every message the register command sends
#[derive(Clone)]
pub struct MessageCatalog {
    texts: HashMap<MessageKey, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        let texts = MessageKey::ALL
            .into_iter()
            .map(|key| (key, default_text(key).to_string()))
            .collect();
        Self { texts }
    }

    /// Replace the text for one key, e.g. for a translation
    #[cfg(test)]
    pub fn with_text(mut self, key: MessageKey, text: impl Into<String>) -> Self {
        self.texts.insert(key, text.into());
        self
    }

    pub fn text(&self, key: MessageKey) -> &str {
        self.texts
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| default_text(key))
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn default_text(key: MessageKey) -> &'static str {
    match key {
        MessageKey::UsageRegister => "Usage: /register <password> <verifyPassword>",
        MessageKey::PasswordMatchError => "Passwords didn't match, check them again!",
        MessageKey::IncompleteEmailSettings => {
            "Error: not all required settings are set for sending emails. Please contact an admin."
        }
        MessageKey::InvalidEmail => "Please insert a valid email address!",
    }
}

impl Messenger for MessageCatalog {
    fn send(&self, sender: &dyn CommandSender, key: MessageKey) {
        sender.send_message(self.text(key));
    }
}
