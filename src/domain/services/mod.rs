pub mod email_service;
pub mod messaging_service;
pub mod password_service;
pub mod recovery_password_service;
pub mod registration_executor;
