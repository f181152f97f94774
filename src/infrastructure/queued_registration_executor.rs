use tokio::sync::mpsc::{self, Receiver, Sender, error::TrySendError};
use tracing::{error, warn};

use crate::{
    domain::{
        models::player::Player,
        repositories::account_repository::AccountRepository,
        services::{
            password_service::PasswordHasher,
            registration_executor::{RegistrationExecutor, RegistrationRequest},
        },
    },
    usecase::perform_register_usecase::PerformRegisterUsecase,
};

/// Hands accepted registrations to a background worker through a bounded queue
#[derive(Clone)]
pub struct QueuedRegistrationExecutor {
    queue: Sender<RegistrationRequest>,
}

impl QueuedRegistrationExecutor {
    /// Create the executor together with the receiving end for the worker
    pub fn channel(capacity: usize) -> (Self, Receiver<RegistrationRequest>) {
        let (queue, receiver) = mpsc::channel(capacity);
        (Self { queue }, receiver)
    }
}

impl RegistrationExecutor for QueuedRegistrationExecutor {
    fn perform_register(&self, player: &Player, password: String, email: String, force_login: bool) {
        let request = RegistrationRequest {
            player: player.clone(),
            password,
            email,
            force_login,
        };
        match self.queue.try_send(request) {
            Ok(()) => {}
            Err(TrySendError::Full(request)) => {
                warn!(player = request.player.name(), "registration queue full, dropping request");
            }
            Err(TrySendError::Closed(request)) => {
                error!(player = request.player.name(), "registration worker stopped, dropping request");
            }
        }
    }
}

/// Drains the registration queue until every executor handle is dropped
pub async fn run_registration_worker<R, P>(
    mut receiver: Receiver<RegistrationRequest>,
    usecase: PerformRegisterUsecase<R, P>,
) where
    R: AccountRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    while let Some(request) = receiver.recv().await {
        let player = request.player.name().to_string();
        if let Err(e) = usecase.register(request).await {
            warn!(player = %player, error = %e, "registration failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::{
        domain::{
            error::DomainError,
            models::account::HashedPassword,
        },
        infrastructure::in_memory_account_repository::InMemoryAccountRepository,
    };

    #[derive(Clone)]
    struct MockPasswordHasher;

    impl PasswordHasher for MockPasswordHasher {
        fn hash(&self, _plain_password: &str) -> Result<HashedPassword, DomainError> {
            Ok(HashedPassword::new("mock_hash".to_string()))
        }
    }

    fn player(name: &str) -> Player {
        Player::new(Uuid::new_v4(), name.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_enqueue_preserves_arguments() {
        let (executor, mut receiver) = QueuedRegistrationExecutor::channel(4);

        executor.perform_register(&player("Bobby"), "myPass".to_string(), String::new(), true);

        let request = receiver.recv().await.unwrap();
        assert_eq!(request.player.name(), "Bobby");
        assert_eq!(request.password, "myPass");
        assert_eq!(request.email, "");
        assert!(request.force_login);
    }

    #[tokio::test]
    async fn test_full_queue_drops_request() {
        let (executor, mut receiver) = QueuedRegistrationExecutor::channel(1);

        executor.perform_register(&player("First"), "a".to_string(), String::new(), true);
        executor.perform_register(&player("Second"), "b".to_string(), String::new(), true);
        drop(executor);

        assert_eq!(receiver.recv().await.unwrap().player.name(), "First");
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_closed_queue_does_not_panic() {
        let (executor, receiver) = QueuedRegistrationExecutor::channel(1);
        drop(receiver);

        executor.perform_register(&player("Bobby"), "a".to_string(), String::new(), true);
    }

    #[tokio::test]
    async fn test_worker_registers_queued_players() {
        let repository = InMemoryAccountRepository::new();
        let (executor, receiver) = QueuedRegistrationExecutor::channel(8);
        let usecase = PerformRegisterUsecase::new(repository.clone(), MockPasswordHasher);

        executor.perform_register(&player("Bobby"), "myPass".to_string(), String::new(), true);
        executor.perform_register(
            &player("Alice"),
            "k3x9q2a".to_string(),
            "alice@example.org".to_string(),
            true,
        );
        // duplicate is logged and skipped
        executor.perform_register(&player("bobby"), "other".to_string(), String::new(), true);
        drop(executor);

        run_registration_worker(receiver, usecase).await;

        let bobby = repository.find_by_name("bobby").await.unwrap().unwrap();
        assert_eq!(bobby.name(), "Bobby");
        let alice = repository.find_by_name("alice").await.unwrap().unwrap();
        assert_eq!(alice.email(), Some("alice@example.org"));
    }
}
