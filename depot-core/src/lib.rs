pub mod entity;
pub mod quantity;
pub mod repository;

pub use entity::{Entity, EntityId, EntitySummary};
pub use repository::Repository;

/// Outcomes a repository operation can fail with.
///
/// These are ordinary, expected results: callers decide whether to skip,
/// correct and retry, or abort.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Entity with id {id} already exists")]
    DuplicateId { id: EntityId },
    #[error("Entity with id {id} not found")]
    NotFound { id: EntityId },
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity { quantity: i64 },
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
