//! The module contains the errors the pricing engine can throw.
//!
//! Pricing itself only ever fails with [`ServiceNotFound`]. The remaining
//! variants are raised while building catalogs, promo tables and rates from
//! configuration, before any price is computed.
//!
//!  [`ServiceNotFound`]: EngineError::ServiceNotFound
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("\"{0}\" service not found!")]
    ServiceNotFound(String),
    #[error("\"{0}\" service already present!")]
    DuplicateService(String),
    #[error("Invalid service: {0}")]
    InvalidService(String),
    #[error("\"{0}\" promo code already present!")]
    DuplicatePromo(String),
    #[error("Invalid promo: {0}")]
    InvalidPromo(String),
    #[error("Invalid rate: {0}")]
    InvalidRate(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Unknown service category: {0}")]
    UnknownCategory(String),
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}
