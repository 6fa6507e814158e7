use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use lendcore::workflows::lending::intake::{DealId, DealRecord, DealRepository, RepositoryError};
use lendcore::workflows::lending::properties::{
    InvestmentType, Property, PropertyId, PropertyStore, PropertyStoreError, RehabLevel,
};
use lendcore::workflows::lending::underwriting::UnderwritingConfig;
use lendcore::workflows::lending::{LendingGateway, SimulatedLatency};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Listing source for demo and local runs. The production deployment swaps
/// this for the external property data API behind the same trait.
#[derive(Clone)]
pub(crate) struct InMemoryPropertyStore {
    listings: Vec<Property>,
}

impl Default for InMemoryPropertyStore {
    fn default() -> Self {
        Self {
            listings: demo_listings(),
        }
    }
}

impl PropertyStore for InMemoryPropertyStore {
    fn fetch(&self, id: PropertyId) -> Result<Option<Property>, PropertyStoreError> {
        Ok(self
            .listings
            .iter()
            .find(|listing| listing.id == id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Property>, PropertyStoreError> {
        Ok(self.listings.clone())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryDealRepository {
    records: Arc<Mutex<HashMap<DealId, DealRecord>>>,
}

impl DealRepository for InMemoryDealRepository {
    fn insert(&self, record: DealRecord) -> Result<DealRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.deal_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.deal_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &DealId) -> Result<Option<DealRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(crate) fn build_gateway(
    latency: SimulatedLatency,
) -> Arc<LendingGateway<InMemoryPropertyStore, InMemoryDealRepository>> {
    Arc::new(LendingGateway::new(
        Arc::new(InMemoryPropertyStore::default()),
        Arc::new(InMemoryDealRepository::default()),
        UnderwritingConfig::default(),
        latency,
    ))
}

pub(crate) fn demo_listings() -> Vec<Property> {
    vec![
        Property {
            id: PropertyId(1),
            address: "1427 Brookhaven Dr, Memphis".to_string(),
            state: "TN".to_string(),
            investment_type: InvestmentType::Dscr,
            purchase_price: 350_000,
            est_rent: Some(3_200),
            est_arv: None,
            taxes: 350,
            insurance: 120,
            rehab: 0,
            rehab_type: None,
        },
        Property {
            id: PropertyId(2),
            address: "884 Sycamore Ave, Columbus".to_string(),
            state: "OH".to_string(),
            investment_type: InvestmentType::Dscr,
            purchase_price: 215_000,
            est_rent: Some(1_950),
            est_arv: None,
            taxes: 210,
            insurance: 95,
            rehab: 0,
            rehab_type: None,
        },
        Property {
            id: PropertyId(3),
            address: "2210 Ridgecrest Ln, Dallas".to_string(),
            state: "TX".to_string(),
            investment_type: InvestmentType::FixFlip,
            purchase_price: 240_000,
            est_rent: None,
            est_arv: Some(340_000),
            taxes: 390,
            insurance: 140,
            rehab: 60_000,
            rehab_type: Some(RehabLevel::Heavy),
        },
        Property {
            id: PropertyId(4),
            address: "19 Palmetto Ct, Tampa".to_string(),
            state: "FL".to_string(),
            investment_type: InvestmentType::FixFlip,
            purchase_price: 180_000,
            est_rent: None,
            est_arv: Some(265_000),
            taxes: 280,
            insurance: 160,
            rehab: 45_000,
            rehab_type: Some(RehabLevel::Cosmetic),
        },
        Property {
            id: PropertyId(5),
            address: "633 Laurel St, Charlotte".to_string(),
            state: "NC".to_string(),
            investment_type: InvestmentType::Dscr,
            purchase_price: 289_000,
            est_rent: Some(2_400),
            est_arv: None,
            taxes: 260,
            insurance: 110,
            rehab: 0,
            rehab_type: None,
        },
        Property {
            id: PropertyId(6),
            address: "512 Dogwood Trl, Atlanta".to_string(),
            state: "GA".to_string(),
            investment_type: InvestmentType::FixFlip,
            purchase_price: 205_000,
            est_rent: None,
            est_arv: Some(298_000),
            taxes: 240,
            insurance: 130,
            rehab: 30_000,
            rehab_type: None,
        },
        Property {
            id: PropertyId(7),
            address: "4105 Copper Sky Way, Las Vegas".to_string(),
            state: "NV".to_string(),
            investment_type: InvestmentType::Dscr,
            purchase_price: 315_000,
            est_rent: Some(2_100),
            est_arv: None,
            taxes: 230,
            insurance: 105,
            rehab: 0,
            rehab_type: None,
        },
        Property {
            id: PropertyId(8),
            address: "77 Quarry Rd, Phoenix".to_string(),
            state: "AZ".to_string(),
            investment_type: InvestmentType::FixFlip,
            purchase_price: 198_000,
            est_rent: None,
            est_arv: Some(270_000),
            taxes: 210,
            insurance: 115,
            rehab: 35_000,
            rehab_type: Some(RehabLevel::Heavy),
        },
    ]
}
