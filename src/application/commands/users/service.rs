// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::application::ports::ClockPort;
use crate::domain::user::UserAccountRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserAccountRepository>,
    pub(super) clock: Arc<ClockPort>,
}

impl UserCommandService {
    pub fn new(user_repo: Arc<dyn UserAccountRepository>, clock: Arc<ClockPort>) -> Self {
        Self { user_repo, clock }
    }
}
