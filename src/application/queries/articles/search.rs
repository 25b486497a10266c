use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, PageDto},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleFilter, ArticleSearchBindings, ArticleSort, SearchType},
        pagination::PageRequest,
    },
};
use tracing::debug;

pub struct SearchArticlesQuery {
    pub search_type: Option<String>,
    pub keyword: Option<String>,
    pub page: u32,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

/// Named parameters such as `title` or `createdAt`; names outside the bound set are ignored.
pub struct BindingSearchQuery {
    pub params: Vec<(String, String)>,
    pub page: u32,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

impl ArticleQueryService {
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<PageDto<ArticleDto>> {
        let search_type = query.search_type.as_deref().and_then(|raw| {
            raw.parse::<SearchType>()
                .inspect_err(|err| debug!(%err, "ignoring search type"))
                .ok()
        });
        let filter = ArticleFilter::by_search_type(search_type, query.keyword.as_deref());
        self.run_search(&filter, query.sort.as_deref(), query.page, query.size)
            .await
    }

    pub async fn search_articles_by_bindings(
        &self,
        query: BindingSearchQuery,
    ) -> ApplicationResult<PageDto<ArticleDto>> {
        let filter = ArticleSearchBindings::filter(
            query
                .params
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        );
        self.run_search(&filter, query.sort.as_deref(), query.page, query.size)
            .await
    }

    async fn run_search(
        &self,
        filter: &ArticleFilter,
        sort: Option<&str>,
        page: u32,
        size: Option<u32>,
    ) -> ApplicationResult<PageDto<ArticleDto>> {
        let sort = ArticleSort::parse(sort);
        let request = PageRequest::new(page, size);
        debug!(predicates = filter.predicates().len(), ?sort, ?request, "searching articles");

        let page = self.read_repo.search(filter, sort, request).await?;
        Ok(page.try_map(ArticleDto::try_from)?.into())
    }
}
