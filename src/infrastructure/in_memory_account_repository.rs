use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{
    error::RepositoryError,
    models::account::{Account, normalize_name},
    repositories::account_repository::AccountRepository,
};

/// Process-local account store keyed by lower-cased player name
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Account>, RepositoryError> {
        Ok(self.accounts.read().get(&normalize_name(name)).cloned())
    }

    async fn save(&self, account: Account) -> Result<(), RepositoryError> {
        let mut accounts = self.accounts.write();
        let key = account.normalized_name();
        if accounts.contains_key(&key) {
            return Err(RepositoryError::Duplicate(account.name().to_string()));
        }
        accounts.insert(key, account);
        Ok(())
    }
}
