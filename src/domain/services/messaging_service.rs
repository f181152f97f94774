use crate::domain::models::{message::MessageKey, player::CommandSender};

/// Resolves message keys to text and delivers them
pub trait Messenger: Send + Sync {
    fn send(&self, sender: &dyn CommandSender, key: MessageKey);
}
