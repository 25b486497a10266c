pub mod actor;
pub mod articles;
pub mod pagination;
pub mod users;

pub use actor::Actor;
pub use articles::{ArticleCommentDto, ArticleDto, ArticleSummaryDto, ArticleWithCommentsDto};
pub use pagination::PageDto;
pub use users::UserAccountDto;
