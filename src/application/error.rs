use crate::domain::{article::ArticleId, errors::DomainError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("could not find an article by id={id}")]
    ArticleNotFound { id: String },
}

impl ApplicationError {
    pub fn article_not_found(id: &ArticleId) -> Self {
        Self::ArticleNotFound {
            id: id.as_str().to_owned(),
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ArticleNotFound { .. })
    }
}
