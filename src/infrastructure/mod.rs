pub mod argon2_password_hasher;
pub mod domain_email_validator;
pub mod in_memory_account_repository;
pub mod message_catalog;
pub mod queued_registration_executor;
pub mod random_recovery_password;
pub mod smtp_mail_settings;
