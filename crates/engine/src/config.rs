//! Deserializable pricing section of the application settings.
//!
//! Only describes shapes; reading files and environment variables is up to
//! the binaries.

use serde::Deserialize;

use crate::{
    Currency, Money, PricingEngine, PromoRule, PromoTable, Rate, ResultEngine, ServiceCatalog,
    ServiceCatalogEntry, ServiceCategory,
};

/// One configured service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServiceConfig {
    pub category: ServiceCategory,
    pub id: String,
    pub base_price: i64,
    pub tax_rate: Rate,
    #[serde(default)]
    pub discount_rate: Option<Rate>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// `[pricing]` settings. Absent tables keep the built-in ones.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub currency: Option<String>,
    pub services: Option<Vec<ServiceConfig>>,
    pub promos: Option<Vec<PromoRule>>,
}

impl PricingConfig {
    /// Validate the configured tables and build the engine once.
    pub fn build_engine(self) -> ResultEngine<PricingEngine> {
        let mut builder = PricingEngine::builder();

        if let Some(code) = self.currency {
            builder = builder.currency(Currency::try_from(code.as_str())?);
        }

        if let Some(services) = self.services {
            let catalog = services
                .into_iter()
                .fold(ServiceCatalog::builder(), |catalog, service| {
                    let mut entry = ServiceCatalogEntry::new(
                        service.id,
                        Money::new(service.base_price),
                        service.tax_rate,
                    );
                    entry.discount_rate = service.discount_rate;
                    entry.display_name = service.display_name;
                    catalog.service(service.category, entry)
                })
                .build()?;
            tracing::info!(
                "loaded custom catalog: {} wash, {} mechanic services",
                catalog.len(ServiceCategory::Wash),
                catalog.len(ServiceCategory::Mechanic)
            );
            builder = builder.catalog(catalog);
        }

        if let Some(promos) = self.promos {
            let promos = PromoTable::from_rules(promos)?;
            tracing::info!("loaded {} custom promo codes", promos.len());
            builder = builder.promos(promos);
        }

        Ok(builder.build())
    }
}
