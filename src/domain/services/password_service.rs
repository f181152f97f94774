use crate::domain::{error::DomainError, models::account::HashedPassword};

/// Service for hashing passwords before they are stored
pub trait PasswordHasher: Clone {
    /// Hash a plain text password
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError>;
}
