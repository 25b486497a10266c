use crate::domain::audit::AuditStamp;
use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUserAccount, UserAccount},
    value_objects::UserHandle,
};
use async_trait::async_trait;

#[async_trait]
pub trait UserAccountRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    async fn insert(&self, account: NewUserAccount, stamp: &AuditStamp)
    -> DomainResult<UserAccount>;

    async fn find_by_handle(&self, handle: &UserHandle) -> DomainResult<Option<UserAccount>>;
}
