pub mod comment;
pub mod entity;
pub mod repository;
pub mod search;
pub mod value_objects;

pub use comment::{ArticleComment, ArticleCommentId, CommentContent, NewArticleComment};
pub use entity::Article;
pub use repository::{ArticleCommentRepository, ArticleReadRepository, ArticleWriteRepository};
pub use search::{
    ArticleFilter, ArticlePredicate, ArticleSearchBindings, ArticleSort, ArticleSortField,
    Comparison, PredicateValue, SearchField, SearchType,
};
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle, Hashtag};
