// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle, Hashtag};
use crate::domain::audit::AuditFields;
use crate::domain::user::UserAccount;

/// A board post. `id` and `audit` are only present once the article has been persisted.
#[derive(Debug, Clone)]
pub struct Article {
    id: Option<ArticleId>,
    owner: UserAccount,
    title: ArticleTitle,
    content: ArticleContent,
    hashtag: Option<Hashtag>,
    audit: Option<AuditFields>,
}

impl Article {
    /// Build an article that has not been stored yet.
    pub fn of(
        owner: UserAccount,
        title: ArticleTitle,
        content: ArticleContent,
        hashtag: Option<Hashtag>,
    ) -> Self {
        Self {
            id: None,
            owner,
            title,
            content,
            hashtag,
            audit: None,
        }
    }

    /// Rebuild a stored article from its persisted state.
    pub fn restore(
        id: ArticleId,
        owner: UserAccount,
        title: ArticleTitle,
        content: ArticleContent,
        hashtag: Option<Hashtag>,
        audit: AuditFields,
    ) -> Self {
        Self {
            id: Some(id),
            owner,
            title,
            content,
            hashtag,
            audit: Some(audit),
        }
    }

    pub fn id(&self) -> Option<ArticleId> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn owner(&self) -> &UserAccount {
        &self.owner
    }

    pub fn title(&self) -> &ArticleTitle {
        &self.title
    }

    pub fn content(&self) -> &ArticleContent {
        &self.content
    }

    pub fn hashtag(&self) -> Option<&Hashtag> {
        self.hashtag.as_ref()
    }

    pub fn audit(&self) -> Option<&AuditFields> {
        self.audit.as_ref()
    }

    pub fn set_title(&mut self, title: ArticleTitle) {
        self.title = title;
    }

    pub fn set_content(&mut self, content: ArticleContent) {
        self.content = content;
    }

    pub fn set_hashtag(&mut self, hashtag: Option<Hashtag>) {
        self.hashtag = hashtag;
    }

    pub fn set_owner(&mut self, owner: UserAccount) {
        self.owner = owner;
    }
}

// Identity equality: an unsaved article equals only the very same instance,
// never a copy of it.
impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || matches!((self.id, other.id), (Some(left), Some(right)) if left == right)
    }
}
