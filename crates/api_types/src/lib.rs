use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Wash,
    Mechanic,
}

pub mod catalog {
    use super::*;

    /// One catalog entry as listed to clients.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CatalogEntryView {
        pub id: String,
        pub display_name: String,
        pub base_price_minor: i64,
        /// Tax rate as a fraction, e.g. `0.18`.
        pub tax_rate: f64,
        /// Standing discount as a fraction, `0` when the service has none.
        pub discount_rate: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CatalogResponse {
        pub category: ServiceCategory,
        pub currency: Currency,
        pub services: Vec<CatalogEntryView>,
    }
}

pub mod quote {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct QuoteRequest {
        pub service_id: String,
        /// `wash` or `mechanic`, case-insensitive.
        pub category: String,
        /// Raw user input; normalization happens server side.
        pub promo_code: Option<String>,
    }

    /// Amounts in minor units, mirroring the engine breakdown.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BreakdownView {
        pub service_id: String,
        pub service_name: String,
        pub display_name: String,
        pub category: ServiceCategory,
        pub base_price_minor: i64,
        pub discount_rate: f64,
        pub promo_code: Option<String>,
        pub discount_minor: i64,
        pub subtotal_minor: i64,
        pub taxes_minor: i64,
        pub total_minor: i64,
    }

    /// Display strings for every amount (`₹199` style).
    #[derive(Debug, Serialize, Deserialize)]
    pub struct FormattedAmounts {
        pub base_price: String,
        pub discount: String,
        pub subtotal: String,
        pub taxes: String,
        pub total: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct QuoteResponse {
        pub quote_id: Uuid,
        /// RFC3339 UTC timestamp of when the quote was computed.
        pub quoted_at: DateTime<Utc>,
        pub currency: Currency,
        pub breakdown: BreakdownView,
        pub formatted: FormattedAmounts,
    }
}

pub mod promo {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PromoView {
        pub code: String,
        /// Empty when the code is valid for every category.
        pub categories: Vec<ServiceCategory>,
        pub rate: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PromosResponse {
        pub promos: Vec<PromoView>,
    }
}
