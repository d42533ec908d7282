// tests/support/builders.rs
use super::mocks::fixed_now;
use article_service::application::dto::ArticleDto;
use article_service::domain::article::{
    ArticleAuthor, ArticleSummary, ArticleText, ArticleTitle, NewArticle,
};
use chrono::{DateTime, Utc};

pub struct ArticleBuilder {
    title: String,
    summary: Option<String>,
    text: String,
    author: String,
    date_created: DateTime<Utc>,
    date_updated: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test Article".into(),
            summary: Some("A short summary".into()),
            text: "Test body".into(),
            author: "tester".into(),
            date_created: fixed_now(),
            date_updated: fixed_now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn summary(mut self, summary: Option<&str>) -> Self {
        self.summary = summary.map(str::to_string);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.date_created = at;
        self.date_updated = at;
        self
    }

    pub fn build(self) -> NewArticle {
        NewArticle::new(
            ArticleTitle::new(self.title).unwrap(),
            self.summary.map(|s| ArticleSummary::new(s).unwrap()),
            ArticleText::new(self.text).unwrap(),
            ArticleAuthor::new(self.author).unwrap(),
            self.date_created,
            self.date_updated,
        )
        .unwrap()
    }

    /// The same article as a create request body.
    pub fn dto(self) -> ArticleDto {
        ArticleDto {
            id: None,
            title: self.title,
            summary: self.summary,
            text: self.text,
            author: self.author,
            date_created: None,
            date_updated: None,
        }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
