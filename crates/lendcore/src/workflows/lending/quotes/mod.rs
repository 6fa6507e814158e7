pub mod domain;
pub mod service;

pub use domain::{LoanProduct, Quote, QuoteRequest, CLOSING_COST_RATE};
pub use service::{QuoteError, QuoteService};
