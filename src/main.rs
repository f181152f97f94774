mod config;
mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Settings,
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher,
        domain_email_validator::DomainEmailValidator,
        in_memory_account_repository::InMemoryAccountRepository,
        message_catalog::MessageCatalog,
        queued_registration_executor::{QueuedRegistrationExecutor, run_registration_worker},
        random_recovery_password::RandomRecoveryPassword,
        smtp_mail_settings::SmtpMailSettings,
    },
    presentation::handlers::command_handler::create_command_router,
    usecase::{perform_register_usecase::PerformRegisterUsecase, register_command::RegisterCommand},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let settings = Arc::new(Settings::from_env()?);
    info!(
        addr = %settings.server.listen_addr,
        registration_type = %settings.registration.registration_type,
        password_hash = ?settings.security.password_hash,
        "starting registration service"
    );

    let account_repository = InMemoryAccountRepository::new();
    let password_hasher = Argon2PasswordHasher::new();
    let (executor, receiver) =
        QueuedRegistrationExecutor::channel(settings.server.registration_queue_capacity);
    let perform_register = PerformRegisterUsecase::new(account_repository, password_hasher);
    let worker = tokio::spawn(run_registration_worker(receiver, perform_register));

    let register_command = RegisterCommand::new(
        MessageCatalog::new(),
        DomainEmailValidator::from_settings(&settings.email),
        SmtpMailSettings::from_settings(&settings.email),
        RandomRecoveryPassword::new(),
        executor,
    );

    let app = Router::new()
        .route("/", get(|| async { "register-gate" }))
        .nest(
            "/api",
            create_command_router(register_command, Arc::clone(&settings)),
        );

    let listener = TcpListener::bind(settings.server.listen_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    // the router owned the last executor handle, so the worker drains and stops
    worker.await?;

    Ok(())
}
