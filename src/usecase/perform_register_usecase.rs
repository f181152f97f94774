use tracing::info;

use crate::domain::{
    error::DomainError,
    models::account::Account,
    repositories::account_repository::AccountRepository,
    services::{password_service::PasswordHasher, registration_executor::RegistrationRequest},
};

/// Creates the account for a registration the command accepted
pub struct PerformRegisterUsecase<R: AccountRepository, P: PasswordHasher> {
    account_repository: R,
    password_hasher: P,
}

impl<R: AccountRepository, P: PasswordHasher> PerformRegisterUsecase<R, P> {
    pub fn new(account_repository: R, password_hasher: P) -> Self {
        Self {
            account_repository,
            password_hasher,
        }
    }

    pub async fn register(&self, request: RegistrationRequest) -> Result<Account, DomainError>
    where
        R: Send + Sync,
        P: Send + Sync,
    {
        let RegistrationRequest {
            player,
            password,
            email,
            force_login,
        } = request;

        if self
            .account_repository
            .find_by_name(player.name())
            .await?
            .is_some()
        {
            return Err(DomainError::AlreadyRegistered(player.name().to_string()));
        }

        // two-factor registrations arrive without a password
        let password_hash = if password.is_empty() {
            None
        } else {
            Some(self.password_hasher.hash(&password)?)
        };
        let email = (!email.is_empty()).then_some(email);

        let mut account = Account::new(
            *player.id().as_uuid(),
            player.name().to_string(),
            password_hash,
            email,
        );
        if force_login {
            account.record_login();
        }

        self.account_repository.save(account.clone()).await?;
        info!(
            player = account.name(),
            account_id = %account.id(),
            registered_at = %account.registered_at(),
            logged_in = account.last_login().is_some(),
            has_password = account.password_hash().is_some(),
            has_email = account.email().is_some(),
            "account registered"
        );

        Ok(account)
    }
}
