//! Mapping between engine values and wire types.

use api_types::{
    catalog::CatalogEntryView,
    promo::PromoView,
    quote::{BreakdownView, FormattedAmounts},
};
use engine::{PriceBreakdown, PricingEngine, PromoRule, ServiceCatalogEntry};

pub(crate) fn category_to_api(category: engine::ServiceCategory) -> api_types::ServiceCategory {
    match category {
        engine::ServiceCategory::Wash => api_types::ServiceCategory::Wash,
        engine::ServiceCategory::Mechanic => api_types::ServiceCategory::Mechanic,
    }
}

pub(crate) fn currency_to_api(currency: engine::Currency) -> api_types::Currency {
    match currency {
        engine::Currency::Inr => api_types::Currency::Inr,
    }
}

pub(crate) fn catalog_entry(entry: &ServiceCatalogEntry) -> CatalogEntryView {
    CatalogEntryView {
        id: entry.id.clone(),
        display_name: entry.display_name().to_string(),
        base_price_minor: entry.base_price.minor(),
        tax_rate: entry.tax_rate.into(),
        discount_rate: entry.standing_discount().into(),
    }
}

pub(crate) fn promo(rule: &PromoRule) -> PromoView {
    PromoView {
        code: rule.code.clone(),
        categories: rule.categories.iter().copied().map(category_to_api).collect(),
        rate: rule.rate.into(),
    }
}

pub(crate) fn breakdown(quote: &PriceBreakdown) -> BreakdownView {
    BreakdownView {
        service_id: quote.service_id.clone(),
        service_name: quote.service_name.clone(),
        display_name: quote.display_name.clone(),
        category: category_to_api(quote.category),
        base_price_minor: quote.base_price.minor(),
        discount_rate: quote.discount_rate.into(),
        promo_code: quote.promo_code.clone(),
        discount_minor: quote.discount.minor(),
        subtotal_minor: quote.subtotal.minor(),
        taxes_minor: quote.taxes.minor(),
        total_minor: quote.total.minor(),
    }
}

pub(crate) fn formatted(engine: &PricingEngine, quote: &PriceBreakdown) -> FormattedAmounts {
    FormattedAmounts {
        base_price: engine.format_price(quote.base_price),
        discount: engine.format_price(quote.discount),
        subtotal: engine.format_price(quote.subtotal),
        taxes: engine.format_price(quote.taxes),
        total: engine.format_price(quote.total),
    }
}
