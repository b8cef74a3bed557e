use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{router, run_with_listener, spawn_with_listener};

mod catalog;
mod convert;
mod quote;
mod server;

pub mod types {
    pub mod catalog {
        pub use api_types::catalog::{CatalogEntryView, CatalogResponse};
    }

    pub mod quote {
        pub use api_types::quote::{BreakdownView, FormattedAmounts, QuoteRequest, QuoteResponse};
    }

    pub mod promo {
        pub use api_types::promo::{PromoView, PromosResponse};
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::ServiceNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::UnknownCategory(_) => StatusCode::BAD_REQUEST,
        EngineError::DuplicateService(_)
        | EngineError::InvalidService(_)
        | EngineError::DuplicatePromo(_)
        | EngineError::InvalidPromo(_)
        | EngineError::InvalidRate(_)
        | EngineError::InvalidAmount(_)
        | EngineError::UnsupportedCurrency(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), err.to_string()),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };
        if status.is_client_error() {
            tracing::warn!("request rejected ({status}): {error}");
        }

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Generic(value.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::ServiceNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unknown_category_maps_to_400() {
        let res = ServerError::from(EngineError::UnknownCategory("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn engine_validation_maps_to_422() {
        let res = ServerError::from(EngineError::InvalidAmount("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
