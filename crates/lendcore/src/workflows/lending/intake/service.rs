use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{DealId, DealRecord, DealStatus};
use super::repository::{DealRepository, RepositoryError};

static DEAL_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_deal_id() -> DealId {
    let id = DEAL_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    DealId(format!("deal-{id:06}"))
}

/// Accepts wizard submissions and hands back a tracking receipt. Payloads
/// are opaque; the service stamps an identifier and a receipt time, nothing
/// more.
pub struct IntakeService<R> {
    repository: Arc<R>,
}

impl<R> IntakeService<R>
where
    R: DealRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Record a submission and return the stored record.
    pub fn submit(&self, payload: serde_json::Value) -> Result<DealRecord, IntakeError> {
        let record = DealRecord {
            deal_id: next_deal_id(),
            status: DealStatus::Received,
            received_at: Utc::now(),
            payload,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Fetch an acknowledged deal for status display.
    pub fn get(&self, deal_id: &DealId) -> Result<DealRecord, IntakeError> {
        let record = self
            .repository
            .fetch(deal_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
