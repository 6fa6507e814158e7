//! Investment lending workflow: property catalog and search, underwriting
//! math (amortized payments, DSCR coverage, fix & flip returns), quote
//! generation, and deal intake, exposed through a mock API router.

pub mod intake;
pub mod latency;
pub mod properties;
pub mod quotes;
pub mod router;
pub mod underwriting;

#[cfg(test)]
mod tests;

pub use intake::{DealId, DealReceipt, DealRecord, DealRepository, DealStatus, IntakeService};
pub use latency::SimulatedLatency;
pub use properties::{
    InvestmentType, ListingFilter, Property, PropertyCatalog, PropertyId, PropertyStore,
    PropertyStoreError, RehabLevel, UNSUPPORTED_STATES,
};
pub use quotes::{LoanProduct, Quote, QuoteError, QuoteRequest, QuoteService};
pub use router::{lending_router, LendingGateway};
pub use underwriting::{
    monthly_payment, DscrAnalysis, DscrRequest, DscrStatus, FixFlipAnalysis, FixFlipRequest,
    FlipVerdict, UnderwritingConfig, UnderwritingEngine, UnderwritingError,
};
