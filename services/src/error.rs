use sea_orm::DbErr;
use thiserror::Error;

/// Failure taxonomy shared by every service in this crate.
///
/// Validation, not-found and capacity outcomes are user-facing and never
/// retried. Reconciliation means a bounded retry budget ran out while
/// syncing loan state with a confirmed payment; the payment itself stays
/// intact and the case needs manual follow-up.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Capacity(String),

    #[error("{0}")]
    Reconciliation(String),

    #[error("database error: {0}")]
    Db(DbErr),
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(msg) => ServiceError::NotFound(msg),
            other => ServiceError::Db(other),
        }
    }
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ServiceError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ServiceError::NotFound(msg.into())
    }

    pub fn capacity(msg: impl Into<String>) -> Self {
        ServiceError::Capacity(msg.into())
    }
}
