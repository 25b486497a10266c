// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleFilter, ArticleId, ArticlePredicate, ArticleReadRepository,
    ArticleSort, ArticleSortField, ArticleTitle, ArticleWriteRepository, Comparison, Hashtag,
    PredicateValue, SearchField,
};
use crate::domain::audit::{AuditFields, AuditStamp};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::user::{Nickname, UserAccount, UserAccountId, UserHandle};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "a.id, a.title, a.content, a.hashtag, \
     a.created_at, a.created_by, a.modified_at, a.modified_by, \
     u.id AS owner_id, u.handle AS owner_handle, u.nickname AS owner_nickname, \
     u.created_at AS owner_created_at, u.created_by AS owner_created_by, \
     u.modified_at AS owner_modified_at, u.modified_by AS owner_modified_by";

const OWNER_JOIN: &str = " JOIN user_accounts u ON u.id = a.user_account_id";

const LOCK_ARTICLE_SQL: &str = "SELECT id FROM articles WHERE id = $1 FOR UPDATE";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    hashtag: Option<String>,
    created_at: DateTime<Utc>,
    created_by: String,
    modified_at: DateTime<Utc>,
    modified_by: String,
    owner_id: i64,
    owner_handle: String,
    owner_nickname: Option<String>,
    owner_created_at: DateTime<Utc>,
    owner_created_by: String,
    owner_modified_at: DateTime<Utc>,
    owner_modified_by: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let owner = UserAccount {
            id: UserAccountId::new(row.owner_id)?,
            handle: UserHandle::new(row.owner_handle)?,
            nickname: Nickname::parse_optional(row.owner_nickname)?,
            audit: AuditFields {
                created_at: row.owner_created_at,
                created_by: row.owner_created_by,
                modified_at: row.owner_modified_at,
                modified_by: row.owner_modified_by,
            },
        };
        Ok(Article::restore(
            ArticleId::new(row.id)?,
            owner,
            ArticleTitle::new(row.title)?,
            ArticleContent::new(row.content)?,
            Hashtag::parse_optional(row.hashtag)?,
            AuditFields {
                created_at: row.created_at,
                created_by: row.created_by,
                modified_at: row.modified_at,
                modified_by: row.modified_by,
            },
        ))
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: &Article, stamp: &AuditStamp) -> DomainResult<Article> {
        if article.is_persisted() {
            return Err(DomainError::Validation("article is already persisted".into()));
        }

        let sql = format!(
            "WITH a AS (
                INSERT INTO articles (user_account_id, title, content, hashtag, created_at, created_by, modified_at, modified_by)
                VALUES ($1, $2, $3, $4, $5, $6, $5, $6)
                RETURNING *
             )
             SELECT {ARTICLE_COLUMNS} FROM a{OWNER_JOIN}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(article.owner().id))
            .bind(article.title().as_str())
            .bind(article.content().as_str())
            .bind(article.hashtag().map(Hashtag::as_str))
            .bind(stamp.at)
            .bind(stamp.actor.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, article: &Article, stamp: &AuditStamp) -> DomainResult<Article> {
        let id = article
            .id()
            .ok_or_else(|| DomainError::Validation("cannot update an unsaved article".into()))?;

        let sql = format!(
            "WITH a AS (
                UPDATE articles
                SET title = $1, content = $2, hashtag = $3, modified_at = $4, modified_by = $5,
                    user_account_id = $7
                WHERE id = $6
                RETURNING *
             )
             SELECT {ARTICLE_COLUMNS} FROM a{OWNER_JOIN}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(article.title().as_str())
            .bind(article.content().as_str())
            .bind(article.hashtag().map(Hashtag::as_str))
            .bind(stamp.at)
            .bind(stamp.actor.as_str())
            .bind(i64::from(id))
            .bind(i64::from(article.owner().id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Comment inserts for this article wait on the row lock until commit.
        let locked = sqlx::query_scalar::<_, i64>(LOCK_ARTICLE_SQL)
            .bind(i64::from(id))
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if locked.is_none() {
            tx.rollback().await.map_err(map_sqlx)?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM article_comments WHERE article_id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}

fn column(field: SearchField) -> &'static str {
    match field {
        SearchField::Title => "a.title",
        SearchField::Content => "a.content",
        SearchField::Hashtag => "a.hashtag",
        SearchField::CreatedAt => "a.created_at",
        SearchField::CreatedBy => "a.created_by",
        SearchField::OwnerHandle => "u.handle",
        SearchField::OwnerNickname => "u.nickname",
    }
}

fn sort_column(field: ArticleSortField) -> &'static str {
    match field {
        ArticleSortField::CreatedAt => "a.created_at",
        ArticleSortField::Title => "a.title COLLATE \"C\"",
        ArticleSortField::Hashtag => "a.hashtag COLLATE \"C\"",
        ArticleSortField::CreatedBy => "a.created_by COLLATE \"C\"",
    }
}

/// `%`, `_` and the escape character itself are matched literally.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

impl PostgresArticleReadRepository {
    fn push_predicate(builder: &mut QueryBuilder<'_, Postgres>, predicate: &ArticlePredicate) {
        builder.push(column(predicate.field()));
        match (predicate.comparison(), predicate.value()) {
            (Comparison::ContainsIgnoreCase, PredicateValue::Text(needle)) => {
                builder.push(" ILIKE ");
                builder.push_bind(like_pattern(needle));
            }
            (_, PredicateValue::Text(value)) => {
                builder.push(" = ");
                builder.push_bind(value.clone());
            }
            (_, PredicateValue::Timestamp(at)) => {
                builder.push(" = ");
                builder.push_bind(*at);
            }
        }
    }

    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
        for (index, predicate) in filter.predicates().iter().enumerate() {
            builder.push(if index == 0 { " WHERE " } else { " AND " });
            Self::push_predicate(builder, predicate);
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, sort: ArticleSort) {
        let direction = sort.direction.as_sql();
        builder.push(format!(
            " ORDER BY {} {direction}, a.id {direction}",
            sort_column(sort.field)
        ));
    }

    async fn count_matching(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT COUNT(1) FROM articles a{OWNER_JOIN}"));
        Self::apply_filter(&mut builder, filter);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map(i64::unsigned_abs)
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles a{OWNER_JOIN} WHERE a.id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn search(
        &self,
        filter: &ArticleFilter,
        sort: ArticleSort,
        page: PageRequest,
    ) -> DomainResult<Page<Article>> {
        let total_items = self.count_matching(filter).await?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles a{OWNER_JOIN}"));
        Self::apply_filter(&mut builder, filter);
        Self::apply_ordering(&mut builder, sort);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(page.size()));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(articles, page, total_items))
    }

    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM articles")
            .fetch_one(&self.pool)
            .await
            .map(i64::unsigned_abs)
            .map_err(map_sqlx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::ArticleSearchBindings;
    use crate::domain::pagination::SortDirection;

    fn select_sql(filter: &ArticleFilter, sort: ArticleSort) -> String {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles a{OWNER_JOIN}"));
        PostgresArticleReadRepository::apply_filter(&mut builder, filter);
        PostgresArticleReadRepository::apply_ordering(&mut builder, sort);
        builder.sql().to_owned()
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("spring"), "%spring%");
    }

    #[test]
    fn unfiltered_search_has_no_where_clause() {
        let sql = select_sql(&ArticleFilter::all(), ArticleSort::default());
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY a.created_at DESC, a.id DESC"));
    }

    #[test]
    fn bound_parameters_become_placeholders() {
        let filter = ArticleSearchBindings::filter([
            ("title", "spring"),
            ("content", "exact body"),
            ("createdAt", "2024-01-01T00:00:00Z"),
        ]);
        let sql = select_sql(
            &filter,
            ArticleSort::new(ArticleSortField::Hashtag, SortDirection::Asc),
        );
        assert!(sql.contains("WHERE a.title ILIKE $1 AND a.content = $2 AND a.created_at = $3"));
        assert!(sql.ends_with("ORDER BY a.hashtag COLLATE \"C\" ASC, a.id ASC"));
        assert!(!sql.contains("spring"));
    }

    #[test]
    fn owner_search_types_target_the_joined_account() {
        use crate::domain::article::SearchType;
        let by_nick = ArticleFilter::by_search_type(Some(SearchType::Nickname), Some("uno"));
        assert!(select_sql(&by_nick, ArticleSort::default()).contains("WHERE u.nickname ILIKE $1"));
        let by_id = ArticleFilter::by_search_type(Some(SearchType::Id), Some("uno"));
        assert!(select_sql(&by_id, ArticleSort::default()).contains("WHERE u.handle ILIKE $1"));
    }

    #[test]
    fn delete_locks_the_article_row_first() {
        assert!(LOCK_ARTICLE_SQL.starts_with("SELECT id FROM articles"));
        assert!(LOCK_ARTICLE_SQL.ends_with("FOR UPDATE"));
    }
}
