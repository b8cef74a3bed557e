use serde::{Deserialize, Serialize};

use crate::EngineError;

/// ISO-like currency code used by the catalog and every price it produces.
///
/// The marketplace is mono-currency today (`INR`), but the engine models the
/// currency explicitly so display and parsing never hard-code a symbol.
///
/// ## Minor units
///
/// Prices are stored as an `i64` number of **minor units** (see `Money`).
/// `minor_units()` returns how many decimal digits separate them from the
/// major unit shown to customers.
///
/// Example: INR has 2 minor units, so `₹199` ⇄ `19900` paise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Inr => "INR",
        }
    }

    /// Symbol prefixed to formatted amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Inr => "₹",
        }
    }

    /// Number of fraction digits between minor and major units.
    #[must_use]
    pub const fn minor_units(self) -> u8 {
        match self {
            Currency::Inr => 2,
        }
    }

    /// Minor units in one major unit (100 for INR).
    #[must_use]
    pub const fn minor_per_major(self) -> i64 {
        10i64.pow(self.minor_units() as u32)
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(Currency::Inr),
            other => Err(EngineError::UnsupportedCurrency(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Currency::try_from("inr").unwrap(), Currency::Inr);
        assert_eq!(Currency::try_from(" INR ").unwrap(), Currency::Inr);
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(
            Currency::try_from("eur"),
            Err(EngineError::UnsupportedCurrency("EUR".to_string()))
        );
    }

    #[test]
    fn inr_has_hundred_paise() {
        assert_eq!(Currency::Inr.minor_per_major(), 100);
        assert_eq!(Currency::Inr.symbol(), "₹");
    }
}
