// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    /// A write that was expected to touch a row affected none.
    #[error("empty result: {0}")]
    EmptyResult(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
