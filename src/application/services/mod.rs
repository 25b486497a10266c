// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        auditing::AuditingInterceptor,
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            users::UserCommandService,
        },
        ports::ClockPort,
        queries::{articles::ArticleQueryService, users::UserQueryService},
    },
    domain::{
        article::{ArticleCommentRepository, ArticleReadRepository, ArticleWriteRepository},
        user::UserAccountRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserAccountRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn ArticleCommentRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let auditing = Arc::new(AuditingInterceptor::new(Arc::clone(&clock)));

        let user_commands = Arc::new(UserCommandService::new(Arc::clone(&user_repo), clock));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        let article_commands = Arc::new(ArticleCommandService::new(
            article_write_repo,
            Arc::clone(&article_read_repo),
            user_repo,
            Arc::clone(&auditing),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&comment_repo),
        ));
        let comment_commands = Arc::new(CommentCommandService::new(
            comment_repo,
            article_read_repo,
            auditing,
        ));

        Self {
            user_commands,
            user_queries,
            article_commands,
            article_queries,
            comment_commands,
        }
    }
}
