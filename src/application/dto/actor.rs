use crate::application::error::ApplicationResult;
use crate::domain::user::UserHandle;

/// The user on whose behalf a write is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    handle: UserHandle,
}

impl Actor {
    pub fn new(handle: impl Into<String>) -> ApplicationResult<Self> {
        Ok(Self {
            handle: UserHandle::new(handle)?,
        })
    }

    pub fn handle(&self) -> &UserHandle {
        &self.handle
    }
}

impl From<UserHandle> for Actor {
    fn from(handle: UserHandle) -> Self {
        Self { handle }
    }
}
