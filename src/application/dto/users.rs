use crate::domain::user::UserAccount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserAccountDto {
    pub id: i64,
    pub handle: String,
    pub nickname: Option<String>,
    /// Nickname when set, otherwise the handle.
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

impl From<UserAccount> for UserAccountDto {
    fn from(account: UserAccount) -> Self {
        let display_name = account.display_name().to_owned();
        Self {
            id: account.id.into(),
            handle: account.handle.into_inner(),
            nickname: account.nickname.map(|n| n.into_inner()),
            display_name,
            created_at: account.audit.created_at,
            created_by: account.audit.created_by,
        }
    }
}
