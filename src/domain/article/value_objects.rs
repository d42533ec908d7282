use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

pub const TITLE_MAX_CHARS: usize = 100;
pub const SUMMARY_MAX_CHARS: usize = 255;
pub const AUTHOR_MAX_CHARS: usize = 100;

/// Storage-assigned article identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("article id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleId> for String {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title should be populated".into()));
        }
        if value.chars().count() > TITLE_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "title length must be between 1 and {TITLE_MAX_CHARS}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary(String);

impl ArticleSummary {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > SUMMARY_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "summary length shouldn't be greater than {SUMMARY_MAX_CHARS}"
            )));
        }
        Ok(Self(value))
    }

    /// Blank input clears the summary.
    pub fn optional(value: impl Into<String>) -> DomainResult<Option<Self>> {
        let value = value.into();
        if value.trim().is_empty() {
            Ok(None)
        } else {
            Self::new(value).map(Some)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleText(String);

impl ArticleText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("text should be populated".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleAuthor(String);

impl ArticleAuthor {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("author should be populated".into()));
        }
        if value.chars().count() > AUTHOR_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "author length must be between 1 and {AUTHOR_MAX_CHARS}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Article attributes a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleSortField {
    Id,
    Title,
    Summary,
    Text,
    Author,
    DateCreated,
    DateUpdated,
}

impl ArticleSortField {
    pub const fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Summary => "summary",
            Self::Text => "text",
            Self::Author => "author",
            Self::DateCreated => "date_created",
            Self::DateUpdated => "date_updated",
        }
    }
}

impl FromStr for ArticleSortField {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "summary" => Ok(Self::Summary),
            "text" => Ok(Self::Text),
            "author" => Ok(Self::Author),
            "dateCreated" | "date_created" => Ok(Self::DateCreated),
            "dateUpdated" | "date_updated" => Ok(Self::DateUpdated),
            other => Err(DomainError::Validation(format!(
                "unsupported sort property: {other}"
            ))),
        }
    }
}
