use crate::domain::models::player::Player;

/// Everything needed to create an account once a command was accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub player: Player,
    pub password: String,
    pub email: String,
    pub force_login: bool,
}

/// Creates accounts for accepted registrations.
///
/// Fire-and-forget: implementations may queue the work and must not
/// report back to the caller.
pub trait RegistrationExecutor: Send + Sync {
    fn perform_register(&self, player: &Player, password: String, email: String, force_login: bool);
}
