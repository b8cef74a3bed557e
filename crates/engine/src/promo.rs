//! Promotional codes.
//!
//! Codes are matched after normalization (NFKC, trimmed, uppercased), so the
//! raw string typed by a customer can be passed straight through.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::{EngineError, Rate, ResultEngine, ServiceCategory};

/// Canonical form of a promo code.
pub fn normalize_code(raw: &str) -> String {
    raw.nfkc().collect::<String>().trim().to_uppercase()
}

/// A code and the categories it is valid for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoRule {
    pub code: String,
    /// Empty means every category.
    #[serde(default)]
    pub categories: Vec<ServiceCategory>,
    pub rate: Rate,
}

impl PromoRule {
    pub fn new(code: impl Into<String>, categories: &[ServiceCategory], rate: Rate) -> Self {
        Self {
            code: code.into(),
            categories: categories.to_vec(),
            rate,
        }
    }

    #[must_use]
    pub fn applies_to(&self, category: ServiceCategory) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }
}

/// Immutable rule table keyed by normalized code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromoTable {
    rules: BTreeMap<String, PromoRule>,
}

impl PromoTable {
    /// `FIRST20` everywhere, `WASH10` for washes, `MECHANIC15` for mechanics.
    #[must_use]
    pub fn builtin() -> Self {
        let rules = [
            PromoRule::new("FIRST20", &[], Rate::from_bps_unchecked(2_000)),
            PromoRule::new(
                "WASH10",
                &[ServiceCategory::Wash],
                Rate::from_bps_unchecked(1_000),
            ),
            PromoRule::new(
                "MECHANIC15",
                &[ServiceCategory::Mechanic],
                Rate::from_bps_unchecked(1_500),
            ),
        ];
        Self {
            rules: rules.into_iter().map(|r| (r.code.clone(), r)).collect(),
        }
    }

    /// A table where no code matches.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Build a table from configured rules, normalizing their codes.
    pub fn from_rules(rules: impl IntoIterator<Item = PromoRule>) -> ResultEngine<Self> {
        let mut table = Self::empty();
        for mut rule in rules {
            let code = normalize_code(&rule.code);
            if code.is_empty() {
                return Err(EngineError::InvalidPromo("empty promo code".to_string()));
            }
            if table.rules.contains_key(&code) {
                return Err(EngineError::DuplicatePromo(code));
            }
            rule.categories.sort();
            rule.categories.dedup();
            rule.code = code.clone();
            table.rules.insert(code, rule);
        }
        Ok(table)
    }

    /// The rule for `raw_code` if it exists and is valid for `category`.
    #[must_use]
    pub fn lookup(&self, raw_code: &str, category: ServiceCategory) -> Option<&PromoRule> {
        self.rules
            .get(&normalize_code(raw_code))
            .filter(|rule| rule.applies_to(category))
    }

    /// Rules ordered by code.
    pub fn rules(&self) -> impl Iterator<Item = &PromoRule> + '_ {
        self.rules.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for PromoTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize_code("  first20 "), "FIRST20");
        // Fullwidth letters fold under NFKC.
        assert_eq!(normalize_code("ＷＡＳＨ１０"), "WASH10");
    }

    #[test]
    fn lookup_respects_category() {
        let promos = PromoTable::builtin();
        assert!(promos.lookup("wash10", ServiceCategory::Wash).is_some());
        assert!(promos.lookup("wash10", ServiceCategory::Mechanic).is_none());
        assert!(promos.lookup("MECHANIC15", ServiceCategory::Wash).is_none());
        assert!(promos.lookup("First20", ServiceCategory::Mechanic).is_some());
        assert!(promos.lookup("BOGUS", ServiceCategory::Wash).is_none());
        assert!(promos.lookup("", ServiceCategory::Wash).is_none());
    }

    #[test]
    fn from_rules_normalizes_codes() {
        let promos = PromoTable::from_rules([PromoRule::new(
            " monsoon25",
            &[ServiceCategory::Wash],
            Rate::from_bps(2_500).unwrap(),
        )])
        .unwrap();
        let rule = promos.lookup("MONSOON25", ServiceCategory::Wash).unwrap();
        assert_eq!(rule.code, "MONSOON25");
        assert_eq!(promos.len(), 1);
    }

    #[test]
    fn from_rules_rejects_duplicates_after_normalization() {
        let rate = Rate::from_bps(1_000).unwrap();
        let err = PromoTable::from_rules([
            PromoRule::new("save10", &[], rate),
            PromoRule::new("SAVE10 ", &[], rate),
        ])
        .unwrap_err();
        assert_eq!(err, EngineError::DuplicatePromo("SAVE10".to_string()));
    }

    #[test]
    fn from_rules_rejects_blank_code() {
        assert!(matches!(
            PromoTable::from_rules([PromoRule::new("   ", &[], Rate::ZERO)]),
            Err(EngineError::InvalidPromo(_))
        ));
    }

    #[test]
    fn rule_deserializes_with_default_categories() {
        let rule: PromoRule = serde_json::from_str(r#"{"code":"FLAT5","rate":"5%"}"#).unwrap();
        assert!(rule.applies_to(ServiceCategory::Wash));
        assert!(rule.applies_to(ServiceCategory::Mechanic));
    }
}
