use super::domain::{Property, PropertyId};

/// Read-only source of marketed listings.
///
/// The demo build backs this with an in-memory array; the production system
/// substitutes the external property data API without touching the core.
pub trait PropertyStore: Send + Sync {
    fn fetch(&self, id: PropertyId) -> Result<Option<Property>, PropertyStoreError>;
    fn list(&self) -> Result<Vec<Property>, PropertyStoreError>;
}

/// Error enumeration for listing-store failures.
#[derive(Debug, thiserror::Error)]
pub enum PropertyStoreError {
    #[error("property store unavailable: {0}")]
    Unavailable(String),
}
