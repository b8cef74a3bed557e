//! Quote API endpoint

use api_types::quote::{QuoteRequest, QuoteResponse};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Utc;
use engine::ServiceCategory;
use uuid::Uuid;

use crate::{ServerError, convert, server::ServerState};

/// Handle requests for pricing a service
pub async fn quote(
    State(state): State<ServerState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ServerError> {
    let Json(payload) = payload?;
    if payload.service_id.trim().is_empty() {
        return Err(ServerError::Generic("service_id required".to_string()));
    }

    let category: ServiceCategory = payload.category.parse()?;
    let quote = state.engine.calculate_service_price(
        &payload.service_id,
        category,
        payload.promo_code.as_deref(),
    )?;
    tracing::debug!(
        "quoted {} ({category}): total {}",
        quote.service_id,
        quote.total.minor()
    );

    Ok(Json(QuoteResponse {
        quote_id: Uuid::new_v4(),
        quoted_at: Utc::now(),
        currency: convert::currency_to_api(state.engine.currency()),
        breakdown: convert::breakdown(&quote),
        formatted: convert::formatted(&state.engine, &quote),
    }))
}
