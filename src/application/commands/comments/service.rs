use std::sync::Arc;

use crate::{
    application::auditing::AuditingInterceptor,
    domain::article::{ArticleCommentRepository, ArticleReadRepository},
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn ArticleCommentRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) auditing: Arc<AuditingInterceptor>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn ArticleCommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        auditing: Arc<AuditingInterceptor>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
            auditing,
        }
    }
}
