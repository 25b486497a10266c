// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::auditing::AuditingInterceptor,
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        user::UserAccountRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserAccountRepository>,
    pub(super) auditing: Arc<AuditingInterceptor>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserAccountRepository>,
        auditing: Arc<AuditingInterceptor>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            user_repo,
            auditing,
        }
    }
}
