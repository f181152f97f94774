use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Name {0} is already registered")]
    AlreadyRegistered(String),

    #[error("Password hashing failed")]
    HashingFailed,

    #[error("Empty player name")]
    EmptyPlayerName,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Account {0} already exists")]
    Duplicate(String),
}
