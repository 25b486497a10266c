use super::UserQueryService;
use crate::{
    application::{
        dto::UserAccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserHandle,
};

pub struct GetAccountQuery {
    pub handle: String,
}

impl UserQueryService {
    pub async fn get_account(&self, query: GetAccountQuery) -> ApplicationResult<UserAccountDto> {
        let handle = UserHandle::new(query.handle)?;
        let account = self
            .user_repo
            .find_by_handle(&handle)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user account not found"))?;
        Ok(account.into())
    }
}
