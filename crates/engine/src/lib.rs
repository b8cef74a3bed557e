use std::sync::LazyLock;

pub use breakdown::PriceBreakdown;
pub use catalog::{ServiceCatalog, ServiceCatalogBuilder, ServiceCatalogEntry};
pub use category::ServiceCategory;
pub use config::{PricingConfig, ServiceConfig};
pub use currency::Currency;
pub use error::EngineError;
pub use money::{Money, format_price, format_price_in};
pub use promo::{PromoRule, PromoTable, normalize_code};
pub use rate::Rate;

mod breakdown;
mod catalog;
mod category;
mod config;
mod currency;
mod error;
mod money;
mod promo;
mod rate;

type ResultEngine<T> = Result<T, EngineError>;

static BUILTIN: LazyLock<PricingEngine> = LazyLock::new(PricingEngine::default);

/// Price a service against the built-in catalog and promo table.
///
/// ```rust
/// use engine::{Money, ServiceCategory, calculate_service_price};
///
/// let quote = calculate_service_price("basic-wash", ServiceCategory::Wash, None).unwrap();
/// assert_eq!(quote.total, Money::new(23_482));
/// ```
pub fn calculate_service_price(
    service_id: &str,
    category: ServiceCategory,
    promo_code: Option<&str>,
) -> Result<PriceBreakdown, EngineError> {
    BUILTIN.calculate_service_price(service_id, category, promo_code)
}

/// Pure pricing over an immutable catalog and promo table.
///
/// The engine holds no mutable state, so a single instance can be shared
/// across threads (e.g. behind an `Arc`) without locking.
#[derive(Clone, Debug, Default)]
pub struct PricingEngine {
    catalog: ServiceCatalog,
    promos: PromoTable,
    currency: Currency,
}

impl PricingEngine {
    /// Return a builder for `PricingEngine`. Help to build the struct.
    pub fn builder() -> PricingEngineBuilder {
        PricingEngineBuilder::default()
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn promos(&self) -> &PromoTable {
        &self.promos
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Compute the price breakdown of `service_id` in `category`.
    ///
    /// The effective discount is the **maximum** of the catalog's standing
    /// discount and the promo rate, never their sum. Unknown codes, or codes
    /// for another category, are ignored. Discount and taxes are floored, and
    /// taxes apply to the discounted subtotal.
    ///
    /// Fails only with [`EngineError::ServiceNotFound`] (or `InvalidAmount`
    /// for a custom catalog whose prices overflow).
    pub fn calculate_service_price(
        &self,
        service_id: &str,
        category: ServiceCategory,
        promo_code: Option<&str>,
    ) -> ResultEngine<PriceBreakdown> {
        let entry = self
            .catalog
            .get(category, service_id)
            .ok_or_else(|| EngineError::ServiceNotFound(service_id.to_string()))?;

        let standing = entry.standing_discount();
        let promo = promo_code.and_then(|code| {
            let rule = self.promos.lookup(code, category);
            if rule.is_none() {
                tracing::debug!("promo code {code:?} does not apply to {category}");
            }
            rule
        });

        let (discount_rate, promo_code) = match promo {
            Some(rule) if rule.rate > standing => (rule.rate, Some(rule.code.clone())),
            _ => (standing, None),
        };

        let overflow = || EngineError::InvalidAmount("amount too large".to_string());
        let discount = discount_rate.apply(entry.base_price)?;
        let subtotal = entry.base_price.checked_sub(discount).ok_or_else(overflow)?;
        let taxes = entry.tax_rate.apply(subtotal)?;
        let total = subtotal.checked_add(taxes).ok_or_else(overflow)?;

        Ok(PriceBreakdown {
            service_id: entry.id.clone(),
            service_name: entry.id.clone(),
            display_name: entry.display_name().to_string(),
            category,
            base_price: entry.base_price,
            discount_rate,
            promo_code,
            discount,
            subtotal,
            taxes,
            total,
        })
    }

    /// Format an amount in this engine's currency.
    pub fn format_price(&self, amount: Money) -> String {
        format_price_in(amount, self.currency)
    }
}

#[derive(Debug, Default)]
pub struct PricingEngineBuilder {
    catalog: Option<ServiceCatalog>,
    promos: Option<PromoTable>,
    currency: Currency,
}

impl PricingEngineBuilder {
    /// Replace the built-in catalog.
    pub fn catalog(mut self, catalog: ServiceCatalog) -> PricingEngineBuilder {
        self.catalog = Some(catalog);
        self
    }

    /// Replace the built-in promo table.
    pub fn promos(mut self, promos: PromoTable) -> PricingEngineBuilder {
        self.promos = Some(promos);
        self
    }

    pub fn currency(mut self, currency: Currency) -> PricingEngineBuilder {
        self.currency = currency;
        self
    }

    /// Construct `PricingEngine`
    pub fn build(self) -> PricingEngine {
        PricingEngine {
            catalog: self.catalog.unwrap_or_default(),
            promos: self.promos.unwrap_or_default(),
            currency: self.currency,
        }
    }
}
