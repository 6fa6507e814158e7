use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::lending::intake::{
    DealId, DealRecord, DealRepository, IntakeService, RepositoryError,
};
use crate::workflows::lending::latency::SimulatedLatency;
use crate::workflows::lending::properties::{
    InvestmentType, Property, PropertyId, PropertyStore, PropertyStoreError, RehabLevel,
};
use crate::workflows::lending::quotes::QuoteService;
use crate::workflows::lending::router::lending_router;
use crate::workflows::lending::underwriting::{
    DscrRequest, FixFlipRequest, UnderwritingConfig, UnderwritingEngine,
};
use crate::workflows::lending::LendingGateway;

pub(super) fn sample_listings() -> Vec<Property> {
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
            id: PropertyId(3),
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
            id: PropertyId(4),
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
            id: PropertyId(7),
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

pub(super) fn underwriting_config() -> UnderwritingConfig {
    UnderwritingConfig {
        dscr_pass_threshold: 1.10,
        strong_roi_pct: 20.0,
        weak_roi_pct: 10.0,
        default_holding_months: 6,
    }
}

pub(super) fn engine() -> UnderwritingEngine {
    UnderwritingEngine::new(underwriting_config())
}

pub(super) fn benchmark_dscr_request() -> DscrRequest {
    DscrRequest {
        loan_amount: 280_000.0,
        interest_rate: 7.25,
        term_years: 30,
        rent: 3_200.0,
        taxes: 350.0,
        insurance: 120.0,
    }
}

pub(super) fn benchmark_flip_request() -> FixFlipRequest {
    FixFlipRequest {
        purchase_price: 240_000.0,
        rehab_budget: 60_000.0,
        arv: 340_000.0,
        holding_months: 6,
        monthly_costs: 1_000.0,
    }
}

#[derive(Clone)]
pub(super) struct MemoryPropertyStore {
    listings: Vec<Property>,
}

impl Default for MemoryPropertyStore {
    fn default() -> Self {
        Self {
            listings: sample_listings(),
        }
    }
}

impl PropertyStore for MemoryPropertyStore {
    fn fetch(&self, id: PropertyId) -> Result<Option<Property>, PropertyStoreError> {
        Ok(self.listings.iter().find(|listing| listing.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Property>, PropertyStoreError> {
        Ok(self.listings.clone())
    }
}

pub(super) struct UnavailableStore;

impl PropertyStore for UnavailableStore {
    fn fetch(&self, _id: PropertyId) -> Result<Option<Property>, PropertyStoreError> {
        Err(PropertyStoreError::Unavailable("provider offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Property>, PropertyStoreError> {
        Err(PropertyStoreError::Unavailable("provider offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryDealRepository {
    pub(super) records: Arc<Mutex<HashMap<DealId, DealRecord>>>,
}

impl DealRepository for MemoryDealRepository {
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

pub(super) fn build_quote_service() -> QuoteService<MemoryPropertyStore> {
    QuoteService::new(Arc::new(MemoryPropertyStore::default()))
}

pub(super) fn build_intake_service() -> (
    IntakeService<MemoryDealRepository>,
    Arc<MemoryDealRepository>,
) {
    let repository = Arc::new(MemoryDealRepository::default());
    let service = IntakeService::new(repository.clone());
    (service, repository)
}

pub(super) fn build_gateway() -> Arc<LendingGateway<MemoryPropertyStore, MemoryDealRepository>> {
    Arc::new(LendingGateway::new(
        Arc::new(MemoryPropertyStore::default()),
        Arc::new(MemoryDealRepository::default()),
        underwriting_config(),
        SimulatedLatency::none(),
    ))
}

pub(super) fn build_router() -> axum::Router {
    lending_router(build_gateway())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
