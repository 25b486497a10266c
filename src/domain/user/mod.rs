// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUserAccount, UserAccount};
pub use repository::UserAccountRepository;
pub use value_objects::{Nickname, UserAccountId, UserHandle};
