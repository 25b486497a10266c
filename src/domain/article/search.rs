// src/domain/article/search.rs
//! Article search contract.
//!
//! Only the fields listed here can be filtered or sorted on. Callers select a
//! [`SearchType`] with a keyword, or pass named parameters which are resolved
//! through [`ArticleSearchBindings`]; both paths end up as a list of
//! [`ArticlePredicate`]s whose field and comparison are closed enums, so storage
//! backends never see caller-supplied column names.
use crate::domain::article::entity::Article;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::SortDirection;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Title,
    Content,
    Hashtag,
    Id,
    Nickname,
}

impl SearchType {
    pub fn binding(self) -> (SearchField, Comparison) {
        match self {
            SearchType::Title => (SearchField::Title, Comparison::ContainsIgnoreCase),
            SearchType::Content => (SearchField::Content, Comparison::ContainsIgnoreCase),
            SearchType::Hashtag => (SearchField::Hashtag, Comparison::ContainsIgnoreCase),
            SearchType::Id => (SearchField::OwnerHandle, Comparison::ContainsIgnoreCase),
            SearchType::Nickname => (SearchField::OwnerNickname, Comparison::ContainsIgnoreCase),
        }
    }
}

impl FromStr for SearchType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TITLE" => Ok(SearchType::Title),
            "CONTENT" => Ok(SearchType::Content),
            "HASHTAG" => Ok(SearchType::Hashtag),
            "ID" => Ok(SearchType::Id),
            "NICKNAME" => Ok(SearchType::Nickname),
            other => Err(DomainError::Validation(format!(
                "unknown search type '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Content,
    Hashtag,
    CreatedAt,
    CreatedBy,
    OwnerHandle,
    OwnerNickname,
}

impl SearchField {
    fn is_timestamp(self) -> bool {
        matches!(self, SearchField::CreatedAt)
    }

    fn text_of(self, article: &Article) -> Option<&str> {
        match self {
            SearchField::Title => Some(article.title().as_str()),
            SearchField::Content => Some(article.content().as_str()),
            SearchField::Hashtag => article.hashtag().map(|h| h.as_str()),
            SearchField::CreatedBy => article.audit().map(|a| a.created_by.as_str()),
            SearchField::OwnerHandle => Some(article.owner().handle.as_str()),
            SearchField::OwnerNickname => article.owner().nickname.as_ref().map(|n| n.as_str()),
            SearchField::CreatedAt => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    ContainsIgnoreCase,
    Equals,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateValue {
    Text(String),
    Timestamp(DateTime<Utc>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePredicate {
    field: SearchField,
    comparison: Comparison,
    value: PredicateValue,
}

impl ArticlePredicate {
    pub fn new(
        field: SearchField,
        comparison: Comparison,
        value: PredicateValue,
    ) -> DomainResult<Self> {
        let accepted = matches!(
            (&value, field.is_timestamp(), comparison),
            (PredicateValue::Timestamp(_), true, Comparison::Equals)
                | (PredicateValue::Text(_), false, _)
        );
        if !accepted {
            return Err(DomainError::Validation(format!(
                "{comparison:?} on {field:?} does not accept {value:?}"
            )));
        }
        Ok(Self {
            field,
            comparison,
            value,
        })
    }

    pub fn field(&self) -> SearchField {
        self.field
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    pub fn value(&self) -> &PredicateValue {
        &self.value
    }

    pub fn matches(&self, article: &Article) -> bool {
        match &self.value {
            PredicateValue::Timestamp(at) => {
                article.audit().is_some_and(|audit| audit.created_at == *at)
            }
            PredicateValue::Text(needle) => {
                let Some(haystack) = self.field.text_of(article) else {
                    return false;
                };
                match self.comparison {
                    Comparison::Equals => haystack == needle,
                    Comparison::ContainsIgnoreCase => {
                        haystack.to_lowercase().contains(&needle.to_lowercase())
                    }
                }
            }
        }
    }
}

/// Parameter names open to dynamic filtering and how each one compares.
/// `content` is listed without a custom binding and keeps plain equality.
const BOUND_PARAMETERS: [(&str, SearchField, Comparison); 5] = [
    ("title", SearchField::Title, Comparison::ContainsIgnoreCase),
    ("content", SearchField::Content, Comparison::Equals),
    ("hashtag", SearchField::Hashtag, Comparison::ContainsIgnoreCase),
    ("createdAt", SearchField::CreatedAt, Comparison::Equals),
    ("createdBy", SearchField::CreatedBy, Comparison::ContainsIgnoreCase),
];

pub struct ArticleSearchBindings;

impl ArticleSearchBindings {
    pub fn resolve(name: &str) -> Option<(SearchField, Comparison)> {
        BOUND_PARAMETERS
            .iter()
            .find(|(bound, _, _)| *bound == name)
            .map(|(_, field, comparison)| (*field, *comparison))
    }

    /// Unknown names, blank values and unparseable timestamps are skipped.
    pub fn filter<'a, I>(params: I) -> ArticleFilter
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let predicates = params
            .into_iter()
            .filter_map(|(name, raw)| {
                let (field, comparison) = Self::resolve(name)?;
                let raw = raw.trim();
                if raw.is_empty() {
                    return None;
                }
                let value = if field.is_timestamp() {
                    PredicateValue::Timestamp(
                        DateTime::parse_from_rfc3339(raw).ok()?.with_timezone(&Utc),
                    )
                } else {
                    PredicateValue::Text(raw.to_owned())
                };
                ArticlePredicate::new(field, comparison, value).ok()
            })
            .collect();
        ArticleFilter { predicates }
    }
}

/// Conjunction of predicates; empty means every article matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    predicates: Vec<ArticlePredicate>,
}

impl ArticleFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_search_type(search_type: Option<SearchType>, keyword: Option<&str>) -> Self {
        let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());
        let (Some(search_type), Some(keyword)) = (search_type, keyword) else {
            return Self::all();
        };
        let (field, comparison) = search_type.binding();
        match ArticlePredicate::new(field, comparison, PredicateValue::Text(keyword.to_owned())) {
            Ok(predicate) => Self {
                predicates: vec![predicate],
            },
            Err(_) => Self::all(),
        }
    }

    pub fn predicates(&self) -> &[ArticlePredicate] {
        &self.predicates
    }

    pub fn is_unfiltered(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.predicates.iter().all(|p| p.matches(article))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortField {
    #[default]
    CreatedAt,
    Title,
    Hashtag,
    CreatedBy,
}

impl ArticleSortField {
    fn from_param(name: &str) -> Option<Self> {
        match name.trim() {
            "createdAt" => Some(ArticleSortField::CreatedAt),
            "title" => Some(ArticleSortField::Title),
            "hashtag" => Some(ArticleSortField::Hashtag),
            "createdBy" => Some(ArticleSortField::CreatedBy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArticleSort {
    pub field: ArticleSortField,
    pub direction: SortDirection,
}

impl ArticleSort {
    pub fn new(field: ArticleSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parses `field[,direction]`. An omitted or unknown direction sorts ascending;
    /// an unknown field falls back to newest first.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let mut parts = raw.splitn(2, ',');
        let Some(field) = parts.next().and_then(ArticleSortField::from_param) else {
            return Self::default();
        };
        let direction = parts
            .next()
            .and_then(|d| d.parse().ok())
            .unwrap_or(SortDirection::Asc);
        Self::new(field, direction)
    }

    /// Same order the SQL backends produce: text compares bytewise (`COLLATE "C"`),
    /// NULLs sort as the largest value, ties fall back to the id in the same direction.
    pub fn compare(&self, left: &Article, right: &Article) -> Ordering {
        let primary = match self.field {
            ArticleSortField::CreatedAt => {
                let key = |a: &Article| a.audit().map(|audit| audit.created_at);
                nulls_last(key(left), key(right))
            }
            ArticleSortField::Title => left.title().as_str().cmp(right.title().as_str()),
            ArticleSortField::Hashtag => nulls_last(
                left.hashtag().map(|h| h.as_str()),
                right.hashtag().map(|h| h.as_str()),
            ),
            ArticleSortField::CreatedBy => {
                let key = |a: &Article| a.audit().map(|audit| audit.created_by.clone());
                nulls_last(key(left), key(right))
            }
        };
        let ordering = primary.then_with(|| left.id().cmp(&right.id()));
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

fn nulls_last<T: Ord>(left: Option<T>, right: Option<T>) -> Ordering {
    match (left, right) {
        (Some(l), Some(r)) => l.cmp(&r),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
