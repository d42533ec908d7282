use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSortField};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, Slice};
use async_trait::async_trait;

pub type ArticlePageRequest = PageRequest<ArticleSortField>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionMode {
    ReadOnly,
    ReadWrite,
}

impl TransactionMode {
    pub const fn is_read_only(self) -> bool {
        matches!(self, Self::ReadOnly)
    }
}

/// Entry point to article storage. Every access goes through a unit of work
/// obtained from [`ArticleRepository::begin`].
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn begin(&self, mode: TransactionMode) -> DomainResult<Box<dyn ArticleUnitOfWork>>;
}

/// Repository operations bound to one open transaction. Dropping a unit of
/// work without calling `commit` discards its writes.
#[async_trait]
pub trait ArticleUnitOfWork: Send {
    fn mode(&self) -> TransactionMode;

    async fn find_by_id(&mut self, id: &ArticleId) -> DomainResult<Option<Article>>;

    /// Persists a new article and returns it with its assigned identifier.
    async fn insert(&mut self, article: NewArticle) -> DomainResult<Article>;

    /// Writes back an existing article. `date_created` is never rewritten.
    async fn save(&mut self, article: Article) -> DomainResult<Article>;

    /// Fails with [`crate::domain::errors::DomainError::EmptyResult`] when no
    /// row matched.
    async fn delete_by_id(&mut self, id: &ArticleId) -> DomainResult<()>;

    async fn find_all(&mut self, request: &ArticlePageRequest) -> DomainResult<Slice<Article>>;

    async fn commit(self: Box<Self>) -> DomainResult<()>;

    async fn rollback(self: Box<Self>) -> DomainResult<()>;
}
