pub mod lobby;
pub mod login;
pub mod register;
