use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::account::Account};

#[async_trait]
pub trait AccountRepository {
    /// Look up an account by player name, ignoring case
    async fn find_by_name(&self, name: &str) -> Result<Option<Account>, RepositoryError>;

    /// Insert a new account; fails if the name is taken
    async fn save(&self, account: Account) -> Result<(), RepositoryError>;
}
