// src/domain/user/entity.rs
use crate::domain::audit::AuditFields;
use crate::domain::user::value_objects::{Nickname, UserAccountId, UserHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: UserAccountId,
    pub handle: UserHandle,
    pub nickname: Option<Nickname>,
    pub audit: AuditFields,
}

impl UserAccount {
    /// Nickname if set, otherwise the handle.
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_ref()
            .map_or_else(|| self.handle.as_str(), Nickname::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct NewUserAccount {
    pub handle: UserHandle,
    pub nickname: Option<Nickname>,
}

impl NewUserAccount {
    pub fn new(handle: UserHandle, nickname: Option<Nickname>) -> Self {
        Self { handle, nickname }
    }
}
