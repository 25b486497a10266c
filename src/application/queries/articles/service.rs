use std::sync::Arc;

use crate::domain::article::{ArticleCommentRepository, ArticleReadRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn ArticleCommentRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn ArticleCommentRepository>,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
        }
    }
}
