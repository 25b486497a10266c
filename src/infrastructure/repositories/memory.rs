// src/infrastructure/repositories/memory.rs
//! Process-local storage used when no database is configured and by the
//! integration tests. Filtering and ordering go through the same domain
//! types the SQL backend translates, so both backends agree on results.
use crate::domain::article::{
    Article, ArticleComment, ArticleCommentId, ArticleCommentRepository, ArticleFilter, ArticleId,
    ArticleReadRepository, ArticleSort, ArticleWriteRepository, CommentContent, NewArticleComment,
};
use crate::domain::audit::{AuditFields, AuditStamp};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::user::{
    NewUserAccount, UserAccount, UserAccountId, UserAccountRepository, UserHandle,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct BoardState {
    users: BTreeMap<i64, UserAccount>,
    articles: BTreeMap<i64, Article>,
    comments: BTreeMap<i64, ArticleComment>,
    last_user_id: i64,
    last_article_id: i64,
    last_comment_id: i64,
}

impl BoardState {
    fn owner_exists(&self, id: UserAccountId) -> bool {
        self.users.contains_key(&id.0)
    }
}

#[derive(Clone, Default)]
pub struct MemoryBoardStore {
    state: Arc<Mutex<BoardState>>,
}

impl MemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, BoardState>> {
        self.state
            .lock()
            .map_err(|_| DomainError::Persistence("memory store lock poisoned".into()))
    }
}

fn count_of(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}

#[async_trait]
impl UserAccountRepository for MemoryBoardStore {
    async fn count(&self) -> DomainResult<u64> {
        Ok(count_of(self.lock()?.users.len()))
    }

    async fn insert(
        &self,
        account: NewUserAccount,
        stamp: &AuditStamp,
    ) -> DomainResult<UserAccount> {
        let mut state = self.lock()?;
        if state.users.values().any(|u| u.handle == account.handle) {
            return Err(DomainError::Conflict("handle already exists".into()));
        }
        state.last_user_id += 1;
        let created = UserAccount {
            id: UserAccountId(state.last_user_id),
            handle: account.handle,
            nickname: account.nickname,
            audit: AuditFields::created(stamp),
        };
        state.users.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn find_by_handle(&self, handle: &UserHandle) -> DomainResult<Option<UserAccount>> {
        let state = self.lock()?;
        Ok(state.users.values().find(|u| &u.handle == handle).cloned())
    }
}

#[async_trait]
impl ArticleWriteRepository for MemoryBoardStore {
    async fn insert(&self, article: &Article, stamp: &AuditStamp) -> DomainResult<Article> {
        if article.is_persisted() {
            return Err(DomainError::Validation("article is already persisted".into()));
        }
        let mut state = self.lock()?;
        if !state.owner_exists(article.owner().id) {
            return Err(DomainError::NotFound("user account not found".into()));
        }
        state.last_article_id += 1;
        let id = state.last_article_id;
        let stored = Article::restore(
            ArticleId(id),
            article.owner().clone(),
            article.title().clone(),
            article.content().clone(),
            article.hashtag().cloned(),
            AuditFields::created(stamp),
        );
        state.articles.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, article: &Article, stamp: &AuditStamp) -> DomainResult<Article> {
        let id = article
            .id()
            .ok_or_else(|| DomainError::Validation("cannot update an unsaved article".into()))?;
        let mut state = self.lock()?;
        if !state.owner_exists(article.owner().id) {
            return Err(DomainError::NotFound("user account not found".into()));
        }
        let current = state
            .articles
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        let mut audit = current
            .audit()
            .cloned()
            .unwrap_or_else(|| AuditFields::created(stamp));
        audit.touch(stamp);
        *current = Article::restore(
            id,
            article.owner().clone(),
            article.title().clone(),
            article.content().clone(),
            article.hashtag().cloned(),
            audit,
        );
        Ok(current.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        let mut state = self.lock()?;
        if state.articles.remove(&id.0).is_none() {
            return Ok(false);
        }
        state.comments.retain(|_, comment| comment.article_id != id);
        Ok(true)
    }
}

#[async_trait]
impl ArticleReadRepository for MemoryBoardStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.lock()?.articles.get(&id.0).cloned())
    }

    async fn search(
        &self,
        filter: &ArticleFilter,
        sort: ArticleSort,
        page: PageRequest,
    ) -> DomainResult<Page<Article>> {
        let state = self.lock()?;
        let mut matching: Vec<&Article> = state
            .articles
            .values()
            .filter(|article| filter.matches(article))
            .collect();
        matching.sort_by(|left, right| sort.compare(left, right));

        let total_items = count_of(matching.len());
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let items = matching
            .into_iter()
            .skip(offset)
            .take(page.size() as usize)
            .cloned()
            .collect();
        Ok(Page::new(items, page, total_items))
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(count_of(self.lock()?.articles.len()))
    }
}

#[async_trait]
impl ArticleCommentRepository for MemoryBoardStore {
    async fn insert(
        &self,
        comment: NewArticleComment,
        stamp: &AuditStamp,
    ) -> DomainResult<ArticleComment> {
        let mut state = self.lock()?;
        if !state.articles.contains_key(&comment.article_id.0) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        state.last_comment_id += 1;
        let created = ArticleComment {
            id: ArticleCommentId(state.last_comment_id),
            article_id: comment.article_id,
            content: comment.content,
            audit: AuditFields::created(stamp),
        };
        state.comments.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn update_content(
        &self,
        id: ArticleCommentId,
        content: CommentContent,
        stamp: &AuditStamp,
    ) -> DomainResult<Option<ArticleComment>> {
        let mut state = self.lock()?;
        let Some(comment) = state.comments.get_mut(&id.0) else {
            return Ok(None);
        };
        comment.set_content(content);
        comment.audit.touch(stamp);
        Ok(Some(comment.clone()))
    }

    async fn delete(&self, id: ArticleCommentId) -> DomainResult<bool> {
        Ok(self.lock()?.comments.remove(&id.0).is_some())
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleComment>> {
        let state = self.lock()?;
        let mut comments: Vec<ArticleComment> = state
            .comments
            .values()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(ArticleComment::newest_first);
        Ok(comments)
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(count_of(self.lock()?.comments.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleContent, ArticleTitle, Hashtag, SearchType};
    use chrono::{Duration, TimeZone, Utc};

    fn stamp(handle: &str, minute: i64) -> AuditStamp {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        AuditStamp::new(UserHandle::new(handle).unwrap(), base + Duration::minutes(minute))
    }

    async fn seed_owner(store: &MemoryBoardStore, handle: &str) -> UserAccount {
        UserAccountRepository::insert(
            store,
            NewUserAccount::new(UserHandle::new(handle).unwrap(), None),
            &stamp(handle, 0),
        )
        .await
        .unwrap()
    }

    async fn seed_article(
        store: &MemoryBoardStore,
        owner: &UserAccount,
        title: &str,
        minute: i64,
    ) -> Article {
        let draft = Article::of(
            owner.clone(),
            ArticleTitle::new(title).unwrap(),
            ArticleContent::new("body").unwrap(),
            Hashtag::parse_optional(Some("#tag".into())).unwrap(),
        );
        ArticleWriteRepository::insert(store, &draft, &stamp(owner.handle.as_str(), minute))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn delete_cascades_to_comments_only_of_that_article() {
        let store = MemoryBoardStore::new();
        let owner = seed_owner(&store, "uno").await;
        let first = seed_article(&store, &owner, "first", 1).await;
        let second = seed_article(&store, &owner, "second", 2).await;
        for (article, minute) in [(&first, 3), (&first, 4), (&second, 5)] {
            let comment = NewArticleComment {
                article_id: article.id().unwrap(),
                content: CommentContent::new("hi").unwrap(),
            };
            ArticleCommentRepository::insert(&store, comment, &stamp("uno", minute))
                .await
                .unwrap();
        }

        let removed = ArticleWriteRepository::delete(&store, first.id().unwrap())
            .await
            .unwrap();

        assert!(removed);
        assert_eq!(ArticleReadRepository::count(&store).await.unwrap(), 1);
        assert_eq!(ArticleCommentRepository::count(&store).await.unwrap(), 1);
        assert!(!ArticleWriteRepository::delete(&store, first.id().unwrap()).await.unwrap());
    }

    #[tokio::test]
    async fn update_touches_only_modified_pair() {
        let store = MemoryBoardStore::new();
        let owner = seed_owner(&store, "uno").await;
        let mut article = seed_article(&store, &owner, "before", 1).await;
        article.set_title(ArticleTitle::new("after").unwrap());

        let updated = ArticleWriteRepository::update(&store, &article, &stamp("dos", 9))
            .await
            .unwrap();

        let audit = updated.audit().unwrap();
        assert_eq!(updated.title().as_str(), "after");
        assert_eq!(audit.created_by, "uno");
        assert_eq!(audit.modified_by, "dos");
        assert!(audit.modified_at > audit.created_at);
    }

    #[tokio::test]
    async fn update_can_move_article_to_another_owner() {
        let store = MemoryBoardStore::new();
        let uno = seed_owner(&store, "uno").await;
        let dos = seed_owner(&store, "dos").await;
        let mut article = seed_article(&store, &uno, "handover", 1).await;
        article.set_owner(dos.clone());

        ArticleWriteRepository::update(&store, &article, &stamp("uno", 2))
            .await
            .unwrap();

        let reloaded = ArticleReadRepository::find_by_id(&store, article.id().unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.owner().handle, dos.handle);
        assert_eq!(reloaded.audit().unwrap().created_by, "uno");
    }

    #[tokio::test]
    async fn article_insert_requires_known_owner() {
        let store = MemoryBoardStore::new();
        let ghost = UserAccount {
            id: UserAccountId(42),
            handle: UserHandle::new("ghost").unwrap(),
            nickname: None,
            audit: AuditFields::created(&stamp("ghost", 0)),
        };
        let draft = Article::of(
            ghost,
            ArticleTitle::new("t").unwrap(),
            ArticleContent::new("c").unwrap(),
            None,
        );
        let err = ArticleWriteRepository::insert(&store, &draft, &stamp("ghost", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn search_pages_filtered_results_in_sort_order() {
        let store = MemoryBoardStore::new();
        let owner = seed_owner(&store, "uno").await;
        for (minute, title) in ["spring one", "rust", "Spring two", "spring three"]
            .iter()
            .enumerate()
        {
            seed_article(&store, &owner, title, i64::try_from(minute).unwrap()).await;
        }
        let filter = ArticleFilter::by_search_type(Some(SearchType::Title), Some("spring"));

        let page = ArticleReadRepository::search(
            &store,
            &filter,
            ArticleSort::default(),
            PageRequest::new(0, Some(2)),
        )
        .await
        .unwrap();

        let titles: Vec<&str> = page.items.iter().map(|a| a.title().as_str()).collect();
        assert_eq!(titles, vec!["spring three", "Spring two"]);
        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages(), 2);
    }

    #[tokio::test]
    async fn duplicate_handles_conflict() {
        let store = MemoryBoardStore::new();
        seed_owner(&store, "uno").await;
        let err = UserAccountRepository::insert(
            &store,
            NewUserAccount::new(UserHandle::new("uno").unwrap(), None),
            &stamp("uno", 1),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}
