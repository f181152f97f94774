pub mod perform_register_usecase;
pub mod register_command;
