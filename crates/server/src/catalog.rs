//! Catalog and promo listing endpoints

use api_types::{catalog::CatalogResponse, promo::PromosResponse};
use axum::{
    Json,
    extract::{Path, State},
};
use engine::ServiceCategory;

use crate::{ServerError, convert, server::ServerState};

/// Handle requests for listing the services of one category
pub async fn list(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> Result<Json<CatalogResponse>, ServerError> {
    let category: ServiceCategory = category.parse()?;

    let services = state
        .engine
        .catalog()
        .entries(category)
        .map(convert::catalog_entry)
        .collect();

    Ok(Json(CatalogResponse {
        category: convert::category_to_api(category),
        currency: convert::currency_to_api(state.engine.currency()),
        services,
    }))
}

/// Handle requests for listing the active promo codes
pub async fn promos(State(state): State<ServerState>) -> Json<PromosResponse> {
    Json(PromosResponse {
        promos: state.engine.promos().rules().map(convert::promo).collect(),
    })
}
