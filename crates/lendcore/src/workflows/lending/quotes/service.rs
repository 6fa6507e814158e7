use std::sync::Arc;

use super::domain::{LoanProduct, Quote, QuoteRequest, CLOSING_COST_RATE};
use crate::workflows::lending::properties::{PropertyStore, PropertyStoreError};

/// Prices a listing against the fixed rate sheet.
pub struct QuoteService<P> {
    store: Arc<P>,
}

impl<P> QuoteService<P>
where
    P: PropertyStore,
{
    pub fn new(store: Arc<P>) -> Self {
        Self { store }
    }

    /// Generate a quote for a known listing.
    ///
    /// The loan amount is the purchase price net of the down payment, rounded
    /// to whole dollars; closing costs are estimated from that rounded
    /// figure.
    pub fn generate(&self, request: &QuoteRequest) -> Result<Quote, QuoteError> {
        let property = self
            .store
            .fetch(request.property_id)?
            .ok_or(QuoteError::PropertyNotFound(request.property_id.0))?;

        let financed_share = 1.0 - request.down_payment_percent / 100.0;
        let loan_amount = (f64::from(property.purchase_price) * financed_share).round() as i64;
        let est_closing_costs = (loan_amount as f64 * CLOSING_COST_RATE).round() as i64;

        let product = LoanProduct::for_investment(request.investment_type);

        Ok(Quote {
            property_id: property.id,
            loan_amount,
            interest_rate: product.interest_rate,
            term_years: product.term_years,
            product_type: product.product_type.to_string(),
            est_closing_costs,
        })
    }
}

/// Error raised by quote generation.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("no property found for id {0}")]
    PropertyNotFound(u64),
    #[error(transparent)]
    Store(#[from] PropertyStoreError),
}
