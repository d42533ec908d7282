use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

const CHK_ARTICLE_TIMESTAMPS: &str = "date_created <= date_updated";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::NotNullViolation => {
                DomainError::Validation(format!("missing required value: {}", db_err.message()))
            }
            ErrorKind::CheckViolation => {
                if db_err.message().contains(CHK_ARTICLE_TIMESTAMPS) {
                    DomainError::Validation("dateCreated must not be after dateUpdated".into())
                } else {
                    DomainError::Validation("check constraint violated".into())
                }
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        sqlx::Error::PoolTimedOut => {
            DomainError::Persistence("timed out waiting for a database connection".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
