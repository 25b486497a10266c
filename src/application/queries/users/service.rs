use std::sync::Arc;

use crate::domain::user::UserAccountRepository;

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserAccountRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserAccountRepository>) -> Self {
        Self { user_repo }
    }
}
