// src/application/commands/users/mod.rs
mod register;
mod service;

pub use register::RegisterUserCommand;
pub use service::UserCommandService;
