use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted deals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DealId(pub String);

/// Status stamped on an acknowledged submission. The mock intake never moves
/// a deal past receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealStatus {
    Received,
}

impl DealStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DealStatus::Received => "received",
        }
    }
}

/// Stored intake record. The wizard payload is opaque to the platform; it is
/// recorded verbatim for the operations team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealRecord {
    pub deal_id: DealId,
    pub status: DealStatus,
    pub received_at: DateTime<Utc>,
    pub payload: serde_json::Value,
}

impl DealRecord {
    pub fn receipt(&self) -> DealReceipt {
        DealReceipt {
            deal_id: self.deal_id.clone(),
            status: self.status.label(),
        }
    }
}

/// Acknowledgment returned to the submitting front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealReceipt {
    pub deal_id: DealId,
    pub status: &'static str,
}
