// src/application/ports/mapper.rs
use crate::application::dto::{ArticleDto, ArticleUpdateDto};
use crate::domain::article::{Article, NewArticle};
use crate::domain::errors::DomainResult;

/// Translates between the external article shapes and the entity shapes.
pub trait ArticleMapper: Send + Sync {
    /// Builds an unsaved entity. Any identifier on the DTO is ignored.
    fn to_entity(&self, dto: ArticleDto) -> DomainResult<NewArticle>;

    /// Copies every field present on `update` onto `article`; absent fields
    /// leave the entity untouched.
    fn merge_update(&self, update: &ArticleUpdateDto, article: &mut Article) -> DomainResult<()>;

    fn to_dto(&self, article: Article) -> ArticleDto;
}
