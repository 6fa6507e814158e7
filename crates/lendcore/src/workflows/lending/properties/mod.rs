pub mod domain;
pub mod repository;
pub mod search;

pub use domain::{InvestmentType, Property, PropertyId, RehabLevel};
pub use repository::{PropertyStore, PropertyStoreError};
pub use search::{ListingFilter, PropertyCatalog, UNSUPPORTED_STATES};
