mod comments;
mod get_by_id;
mod search;
mod service;

pub use comments::ListCommentsQuery;
pub use get_by_id::GetArticleByIdQuery;
pub use search::{BindingSearchQuery, SearchArticlesQuery};
pub use service::ArticleQueryService;
