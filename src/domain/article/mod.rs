pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use repository::{ArticlePageRequest, ArticleRepository, ArticleUnitOfWork, TransactionMode};
pub use value_objects::{
    ArticleAuthor, ArticleId, ArticleSortField, ArticleSummary, ArticleText, ArticleTitle,
};
