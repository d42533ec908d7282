// src/application/mappers.rs
use crate::application::{
    dto::{ArticleDto, ArticleUpdateDto},
    ports::mapper::ArticleMapper,
};
use crate::domain::article::{
    Article, ArticleAuthor, ArticleSummary, ArticleText, ArticleTitle, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Default, Clone)]
pub struct DefaultArticleMapper;

impl ArticleMapper for DefaultArticleMapper {
    fn to_entity(&self, dto: ArticleDto) -> DomainResult<NewArticle> {
        let date_created = dto
            .date_created
            .ok_or_else(|| DomainError::Validation("dateCreated is required".into()))?;
        let date_updated = dto
            .date_updated
            .ok_or_else(|| DomainError::Validation("dateUpdated is required".into()))?;

        NewArticle::new(
            ArticleTitle::new(dto.title)?,
            dto.summary.map(ArticleSummary::optional).transpose()?.flatten(),
            ArticleText::new(dto.text)?,
            ArticleAuthor::new(dto.author)?,
            date_created,
            date_updated,
        )
    }

    fn merge_update(&self, update: &ArticleUpdateDto, article: &mut Article) -> DomainResult<()> {
        // Validate everything before touching the entity so a bad field
        // leaves it unchanged.
        let title = update.title.clone().map(ArticleTitle::new).transpose()?;
        let summary = update
            .summary
            .clone()
            .map(ArticleSummary::optional)
            .transpose()?;
        let text = update.text.clone().map(ArticleText::new).transpose()?;

        if let Some(title) = title {
            article.title = title;
        }
        if let Some(summary) = summary {
            article.summary = summary;
        }
        if let Some(text) = text {
            article.text = text;
        }
        Ok(())
    }

    fn to_dto(&self, article: Article) -> ArticleDto {
        ArticleDto {
            id: Some(article.id.into_inner()),
            title: article.title.into_inner(),
            summary: article.summary.map(ArticleSummary::into_inner),
            text: article.text.into_inner(),
            author: article.author.into_inner(),
            date_created: Some(article.date_created),
            date_updated: Some(article.date_updated),
        }
    }
}
