pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{DealId, DealReceipt, DealRecord, DealStatus};
pub use repository::{DealRepository, RepositoryError};
pub use service::{IntakeError, IntakeService};
