use uuid::Uuid;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(Uuid);
impl PlayerId {
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

/// An online player, the only kind of sender allowed to register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
}

impl Player {
    pub fn new(id: Uuid, name: String) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyPlayerName);
        }
        Ok(Self {
            id: PlayerId(id),
            name,
        })
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Anything that can issue a command: players, the console, command blocks
pub trait CommandSender: Send + Sync {
    fn name(&self) -> &str;

    /// Deliver raw text to the sender
    fn send_message(&self, message: &str);

    /// `Some` only when the sender is backed by an online player
    fn as_player(&self) -> Option<&Player>;
}
