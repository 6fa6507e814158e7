use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{InvestmentType, Property, PropertyId, RehabLevel};
use super::repository::{PropertyStore, PropertyStoreError};

/// Jurisdictions the platform does not lend in. Listings in these states are
/// excluded from every search result, no matter what filters are applied.
pub const UNSUPPORTED_STATES: [&str; 4] = ["NV", "AZ", "UT", "OR"];

/// Search criteria. `None` means "All" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_type: Option<InvestmentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rehab_type: Option<RehabLevel>,
}

/// Apply the search filters to a slice of listings.
///
/// Filters apply in sequence: unsupported-state exclusion, investment type,
/// state, then rehab scope. The rehab filter only participates in Fix & Flip
/// searches, and a listing without a rehab label (turnkey) always passes it.
pub fn search_listings(listings: &[Property], filter: &ListingFilter) -> Vec<Property> {
    listings
        .iter()
        .filter(|listing| !UNSUPPORTED_STATES.contains(&listing.state.as_str()))
        .filter(|listing| match filter.investment_type {
            Some(investment_type) => listing.investment_type == investment_type,
            None => true,
        })
        .filter(|listing| match &filter.state {
            Some(state) => listing.state == *state,
            None => true,
        })
        .filter(|listing| {
            if filter.investment_type != Some(InvestmentType::FixFlip) {
                return true;
            }
            match filter.rehab_type {
                Some(requested) => match listing.rehab_type {
                    Some(level) => level == requested,
                    None => true,
                },
                None => true,
            }
        })
        .cloned()
        .collect()
}

/// Store-backed facade the router and CLI consume.
pub struct PropertyCatalog<P> {
    store: Arc<P>,
}

impl<P> PropertyCatalog<P>
where
    P: PropertyStore,
{
    pub fn new(store: Arc<P>) -> Self {
        Self { store }
    }

    pub fn search(&self, filter: &ListingFilter) -> Result<Vec<Property>, PropertyStoreError> {
        let listings = self.store.list()?;
        Ok(search_listings(&listings, filter))
    }

    pub fn fetch(&self, id: PropertyId) -> Result<Option<Property>, PropertyStoreError> {
        self.store.fetch(id)
    }
}
