pub mod account;
pub mod message;
pub mod player;
pub mod registration;
