use super::domain::{DealId, DealRecord};

/// Storage abstraction for acknowledged submissions, so the intake service
/// can be exercised in isolation.
pub trait DealRepository: Send + Sync {
    fn insert(&self, record: DealRecord) -> Result<DealRecord, RepositoryError>;
    fn fetch(&self, id: &DealId) -> Result<Option<DealRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
