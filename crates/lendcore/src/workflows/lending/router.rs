use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Deserializer};
use serde_json::json;

use super::intake::{DealId, DealRepository, IntakeError, IntakeService, RepositoryError};
use super::latency::SimulatedLatency;
use super::properties::{
    InvestmentType, ListingFilter, PropertyCatalog, PropertyStore, RehabLevel,
};
use super::quotes::{QuoteError, QuoteRequest, QuoteService};
use super::underwriting::{DscrRequest, FixFlipRequest, UnderwritingConfig, UnderwritingEngine};

/// Shared state behind the mock API: the catalog, pricing, underwriting, and
/// intake facades plus the optional simulated backend delay.
pub struct LendingGateway<P, D> {
    pub catalog: PropertyCatalog<P>,
    pub quotes: QuoteService<P>,
    pub engine: UnderwritingEngine,
    pub intake: IntakeService<D>,
    pub latency: SimulatedLatency,
}

impl<P, D> LendingGateway<P, D>
where
    P: PropertyStore + 'static,
    D: DealRepository + 'static,
{
    pub fn new(
        properties: Arc<P>,
        deals: Arc<D>,
        config: UnderwritingConfig,
        latency: SimulatedLatency,
    ) -> Self {
        Self {
            catalog: PropertyCatalog::new(properties.clone()),
            quotes: QuoteService::new(properties),
            engine: UnderwritingEngine::new(config),
            intake: IntakeService::new(deals),
            latency,
        }
    }
}

/// Router builder exposing the simulated backend endpoints the front ends
/// call.
pub fn lending_router<P, D>(gateway: Arc<LendingGateway<P, D>>) -> Router
where
    P: PropertyStore + 'static,
    D: DealRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/properties/search",
            post(search_handler::<P, D>),
        )
        .route("/api/v1/quotes", post(quote_handler::<P, D>))
        .route("/api/v1/underwrite/dscr", post(dscr_handler::<P, D>))
        .route(
            "/api/v1/underwrite/fix-flip",
            post(fix_flip_handler::<P, D>),
        )
        .route("/api/v1/deals", post(submit_deal_handler::<P, D>))
        .route("/api/v1/deals/:deal_id", get(deal_status_handler::<P, D>))
        .with_state(gateway)
}

/// Wire-level search payload. The front end sends the literal string "All"
/// for an unset dropdown; that sentinel maps to `None` here so the core
/// filter stays fully typed.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default, deserialize_with = "investment_type_filter")]
    pub investment_type: Option<InvestmentType>,
    #[serde(default, deserialize_with = "state_filter")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "rehab_filter")]
    pub rehab_type: Option<RehabLevel>,
}

impl SearchRequest {
    fn into_filter(self) -> ListingFilter {
        ListingFilter {
            investment_type: self.investment_type,
            state: self.state,
            rehab_type: self.rehab_type,
        }
    }
}

fn investment_type_filter<'de, D>(deserializer: D) -> Result<Option<InvestmentType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("All") => Ok(None),
        Some(label) => InvestmentType::from_label(label)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown investment type '{label}'"))),
    }
}

fn state_filter<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|state| state != "All"))
}

fn rehab_filter<'de, D>(deserializer: D) -> Result<Option<RehabLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("All") => Ok(None),
        Some(label) => RehabLevel::from_label(label)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown rehab type '{label}'"))),
    }
}

pub(crate) async fn search_handler<P, D>(
    State(gateway): State<Arc<LendingGateway<P, D>>>,
    axum::Json(request): axum::Json<SearchRequest>,
) -> Response
where
    P: PropertyStore + 'static,
    D: DealRepository + 'static,
{
    gateway.latency.pause().await;
    match gateway.catalog.search(&request.into_filter()) {
        Ok(properties) => {
            (StatusCode::OK, axum::Json(json!({ "properties": properties }))).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn quote_handler<P, D>(
    State(gateway): State<Arc<LendingGateway<P, D>>>,
    axum::Json(request): axum::Json<QuoteRequest>,
) -> Response
where
    P: PropertyStore + 'static,
    D: DealRepository + 'static,
{
    gateway.latency.pause().await;
    match gateway.quotes.generate(&request) {
        Ok(quote) => (StatusCode::OK, axum::Json(quote)).into_response(),
        Err(QuoteError::PropertyNotFound(id)) => {
            let payload = json!({ "error": format!("no property found for id {id}") });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn dscr_handler<P, D>(
    State(gateway): State<Arc<LendingGateway<P, D>>>,
    axum::Json(request): axum::Json<DscrRequest>,
) -> Response
where
    P: PropertyStore + 'static,
    D: DealRepository + 'static,
{
    gateway.latency.pause().await;
    match gateway.engine.coverage(&request) {
        Ok(analysis) => (StatusCode::OK, axum::Json(analysis)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn fix_flip_handler<P, D>(
    State(gateway): State<Arc<LendingGateway<P, D>>>,
    axum::Json(request): axum::Json<FixFlipRequest>,
) -> Response
where
    P: PropertyStore + 'static,
    D: DealRepository + 'static,
{
    gateway.latency.pause().await;
    match gateway.engine.flip_returns(&request) {
        Ok(analysis) => (StatusCode::OK, axum::Json(analysis)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn submit_deal_handler<P, D>(
    State(gateway): State<Arc<LendingGateway<P, D>>>,
    axum::Json(payload): axum::Json<serde_json::Value>,
) -> Response
where
    P: PropertyStore + 'static,
    D: DealRepository + 'static,
{
    gateway.latency.pause().await;
    match gateway.intake.submit(payload) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record.receipt())).into_response(),
        Err(IntakeError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "deal already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn deal_status_handler<P, D>(
    State(gateway): State<Arc<LendingGateway<P, D>>>,
    Path(deal_id): Path<String>,
) -> Response
where
    P: PropertyStore + 'static,
    D: DealRepository + 'static,
{
    gateway.latency.pause().await;
    let id = DealId(deal_id);
    match gateway.intake.get(&id) {
        Ok(record) => {
            let payload = json!({
                "deal_id": record.deal_id.0,
                "status": record.status.label(),
                "received_at": record.received_at,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(IntakeError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": format!("no deal found for id {}", id.0) });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
