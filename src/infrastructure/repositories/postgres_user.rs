// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::audit::{AuditFields, AuditStamp};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    NewUserAccount, Nickname, UserAccount, UserAccountId, UserAccountRepository, UserHandle,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserAccountRepository {
    pool: PgPool,
}

impl PostgresUserAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserAccountRow {
    id: i64,
    handle: String,
    nickname: Option<String>,
    created_at: DateTime<Utc>,
    created_by: String,
    modified_at: DateTime<Utc>,
    modified_by: String,
}

impl TryFrom<UserAccountRow> for UserAccount {
    type Error = DomainError;

    fn try_from(row: UserAccountRow) -> Result<Self, Self::Error> {
        Ok(UserAccount {
            id: UserAccountId::new(row.id)?,
            handle: UserHandle::new(row.handle)?,
            nickname: Nickname::parse_optional(row.nickname)?,
            audit: AuditFields {
                created_at: row.created_at,
                created_by: row.created_by,
                modified_at: row.modified_at,
                modified_by: row.modified_by,
            },
        })
    }
}

#[async_trait]
impl UserAccountRepository for PostgresUserAccountRepository {
    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM user_accounts")
            .fetch_one(&self.pool)
            .await
            .map(|count| count.unsigned_abs())
            .map_err(map_sqlx)
    }

    async fn insert(
        &self,
        account: NewUserAccount,
        stamp: &AuditStamp,
    ) -> DomainResult<UserAccount> {
        let NewUserAccount { handle, nickname } = account;

        let row = sqlx::query_as::<_, UserAccountRow>(
            "INSERT INTO user_accounts (handle, nickname, created_at, created_by, modified_at, modified_by)
             VALUES ($1, $2, $3, $4, $3, $4)
             RETURNING id, handle, nickname, created_at, created_by, modified_at, modified_by",
        )
        .bind(handle.as_str())
        .bind(nickname.as_ref().map(Nickname::as_str))
        .bind(stamp.at)
        .bind(stamp.actor.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        UserAccount::try_from(row)
    }

    async fn find_by_handle(&self, handle: &UserHandle) -> DomainResult<Option<UserAccount>> {
        let row = sqlx::query_as::<_, UserAccountRow>(
            "SELECT id, handle, nickname, created_at, created_by, modified_at, modified_by
             FROM user_accounts WHERE handle = $1",
        )
        .bind(handle.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(UserAccount::try_from).transpose()
    }
}
