//! Static service catalogs, one per [`ServiceCategory`].
//!
//! A catalog is built once (from the built-in tables or from configuration)
//! and never mutated afterwards: there is no insert/remove API on
//! [`ServiceCatalog`], only lookups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{EngineError, Money, Rate, ResultEngine, ServiceCategory};

const GST: Rate = Rate::from_bps_unchecked(1_800);

/// One purchasable service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalogEntry {
    pub id: String,
    pub base_price: Money,
    pub tax_rate: Rate,
    /// Standing discount, `None` means no discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ServiceCatalogEntry {
    pub fn new(id: impl Into<String>, base_price: Money, tax_rate: Rate) -> Self {
        Self {
            id: id.into(),
            base_price,
            tax_rate,
            discount_rate: None,
            display_name: None,
        }
    }

    #[must_use]
    pub fn with_discount(mut self, rate: Rate) -> Self {
        self.discount_rate = Some(rate);
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// The standing discount resolved to zero when unset.
    #[must_use]
    pub fn standing_discount(&self) -> Rate {
        self.discount_rate.unwrap_or(Rate::ZERO)
    }

    /// Human-readable name, falling back to the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}

/// The two disjoint catalogs, keyed by service id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceCatalog {
    wash: BTreeMap<String, ServiceCatalogEntry>,
    mechanic: BTreeMap<String, ServiceCatalogEntry>,
}

impl ServiceCatalog {
    /// Return a builder for `ServiceCatalog`.
    pub fn builder() -> ServiceCatalogBuilder {
        ServiceCatalogBuilder::default()
    }

    /// The catalog the marketplace ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let wash = [
            ServiceCatalogEntry::new("basic-wash", Money::new(19_900), GST)
                .with_display_name("Basic Wash"),
            ServiceCatalogEntry::new("premium-wash", Money::new(39_900), GST)
                .with_discount(Rate::from_bps_unchecked(1_000))
                .with_display_name("Premium Wash"),
        ];
        let mechanic = [
            ServiceCatalogEntry::new("emergency-roadside", Money::new(29_900), GST)
                .with_display_name("Emergency Roadside Assistance"),
        ];

        Self {
            wash: wash.into_iter().map(|e| (e.id.clone(), e)).collect(),
            mechanic: mechanic.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }

    fn table(&self, category: ServiceCategory) -> &BTreeMap<String, ServiceCatalogEntry> {
        match category {
            ServiceCategory::Wash => &self.wash,
            ServiceCategory::Mechanic => &self.mechanic,
        }
    }

    /// Look up a service id within its category.
    #[must_use]
    pub fn get(&self, category: ServiceCategory, id: &str) -> Option<&ServiceCatalogEntry> {
        self.table(category).get(id)
    }

    /// Entries of one category ordered by id.
    pub fn entries(
        &self,
        category: ServiceCategory,
    ) -> impl Iterator<Item = &ServiceCatalogEntry> + '_ {
        self.table(category).values()
    }

    #[must_use]
    pub fn len(&self, category: ServiceCategory) -> usize {
        self.table(category).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wash.is_empty() && self.mechanic.is_empty()
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Collects entries and validates them into an immutable [`ServiceCatalog`].
#[derive(Debug, Default)]
pub struct ServiceCatalogBuilder {
    entries: Vec<(ServiceCategory, ServiceCatalogEntry)>,
}

impl ServiceCatalogBuilder {
    /// Add one service to `category`.
    pub fn service(mut self, category: ServiceCategory, entry: ServiceCatalogEntry) -> Self {
        self.entries.push((category, entry));
        self
    }

    /// Construct `ServiceCatalog`
    pub fn build(self) -> ResultEngine<ServiceCatalog> {
        let mut catalog = ServiceCatalog {
            wash: BTreeMap::new(),
            mechanic: BTreeMap::new(),
        };

        for (category, entry) in self.entries {
            if entry.id.trim().is_empty() {
                return Err(EngineError::InvalidService(format!(
                    "empty service id in {category} catalog"
                )));
            }
            if entry.base_price.is_negative() {
                return Err(EngineError::InvalidService(format!(
                    "{}: base price must be >= 0",
                    entry.id
                )));
            }

            let table = match category {
                ServiceCategory::Wash => &mut catalog.wash,
                ServiceCategory::Mechanic => &mut catalog.mechanic,
            };
            if table.contains_key(&entry.id) {
                return Err(EngineError::DuplicateService(entry.id));
            }
            table.insert(entry.id.clone(), entry);
        }

        Ok(catalog)
    }
}
