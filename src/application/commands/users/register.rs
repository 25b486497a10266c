// src/application/commands/users/register.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::UserAccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::AuditStamp,
        user::{NewUserAccount, Nickname, UserHandle},
    },
};
use tracing::info;

pub struct RegisterUserCommand {
    pub handle: String,
    pub nickname: Option<String>,
}

impl UserCommandService {
    /// Self-registration: the new account is recorded as its own creator.
    pub async fn register(
        &self,
        command: RegisterUserCommand,
    ) -> ApplicationResult<UserAccountDto> {
        let handle = UserHandle::new(command.handle)?;
        let nickname = Nickname::parse_optional(command.nickname)?;

        if self.user_repo.find_by_handle(&handle).await?.is_some() {
            return Err(ApplicationError::conflict("handle already exists"));
        }

        let stamp = AuditStamp::new(handle.clone(), self.clock.now());
        let account = self
            .user_repo
            .insert(NewUserAccount::new(handle, nickname), &stamp)
            .await?;

        info!(handle = %account.handle, "user account registered");
        Ok(account.into())
    }
}
