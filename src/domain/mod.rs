// src/domain/mod.rs
pub mod article;
pub mod errors;
pub mod pagination;

pub use errors::{DomainError, DomainResult};
pub use pagination::{PageRequest, Slice, Sort, SortDirection, SortOrder};
