// src/domain/article/comment.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::audit::AuditFields;
use crate::domain::errors::{DomainError, DomainResult, ensure_text};
use std::cmp::Ordering;

pub const COMMENT_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleCommentId(pub i64);

impl ArticleCommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "comment id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleCommentId> for i64 {
    fn from(value: ArticleCommentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        ensure_text(&value, "comment", COMMENT_MAX_CHARS)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A reply. `article_id` is a back-reference; the comment lives and dies with its article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleComment {
    pub id: ArticleCommentId,
    pub article_id: ArticleId,
    pub content: CommentContent,
    pub audit: AuditFields,
}

impl ArticleComment {
    pub fn set_content(&mut self, content: CommentContent) {
        self.content = content;
    }

    /// Thread order: newest first, ties broken by the higher id.
    pub fn newest_first(left: &Self, right: &Self) -> Ordering {
        right
            .audit
            .created_at
            .cmp(&left.audit.created_at)
            .then_with(|| right.id.cmp(&left.id))
    }
}

#[derive(Debug, Clone)]
pub struct NewArticleComment {
    pub article_id: ArticleId,
    pub content: CommentContent,
}
