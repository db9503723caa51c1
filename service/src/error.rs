use sea_orm::DbErr;
use thiserror::Error;

/// Failure modes of the cupcake service layer. The HTTP layer maps each
/// variant onto the wire contract.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The first validation rule the payload violated.
    #[error("{0}")]
    Validation(String),
    /// The identifier does not resolve to a live record.
    #[error("Item not found")]
    NotFound,
    /// Anything the storage layer reported during a read or write.
    #[error(transparent)]
    Db(#[from] DbErr),
}
