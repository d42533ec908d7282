// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleAuthor, ArticleId, ArticleSummary, ArticleText, ArticleTitle,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub summary: Option<ArticleSummary>,
    pub text: ArticleText,
    pub author: ArticleAuthor,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl Article {
    /// Refreshes `date_updated`. The timestamp never moves backwards, so a
    /// lagging clock cannot break `date_created <= date_updated`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.date_updated = now.max(self.date_updated);
    }
}

/// An article that has not been persisted yet and so has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub summary: Option<ArticleSummary>,
    pub text: ArticleText,
    pub author: ArticleAuthor,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(
        title: ArticleTitle,
        summary: Option<ArticleSummary>,
        text: ArticleText,
        author: ArticleAuthor,
        date_created: DateTime<Utc>,
        date_updated: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if date_created > date_updated {
            return Err(DomainError::Validation(
                "dateCreated must not be after dateUpdated".into(),
            ));
        }
        Ok(Self {
            title,
            summary,
            text,
            author,
            date_created,
            date_updated,
        })
    }

    pub fn with_id(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            summary: self.summary,
            text: self.text,
            author: self.author,
            date_created: self.date_created,
            date_updated: self.date_updated,
        }
    }
}
