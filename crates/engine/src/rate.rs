use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{EngineError, Money, ResultEngine};

const BPS_PER_UNIT: u32 = 10_000;

/// A rational rate in `[0, 1)` stored as integer **basis points**.
///
/// Tax and discount rates never touch floating point once parsed: applying a
/// rate is `floor(amount × bps / 10000)` in 128-bit integers.
///
/// ```rust
/// use engine::{Money, Rate};
///
/// let gst: Rate = "0.18".parse().unwrap();
/// assert_eq!(gst.apply(Money::new(19900)).unwrap(), Money::new(3582));
/// assert_eq!("12.5%".parse::<Rate>().unwrap().bps(), 1250);
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "RateRepr", into = "f64")]
pub struct Rate(u32);

impl Rate {
    pub const ZERO: Rate = Rate(0);

    /// Creates a rate from basis points, rejecting anything `>= 1`.
    pub fn from_bps(bps: u32) -> ResultEngine<Self> {
        if bps >= BPS_PER_UNIT {
            return Err(EngineError::InvalidRate(format!(
                "{bps} bps: rate must be below 1"
            )));
        }
        Ok(Self(bps))
    }

    /// Built-in tables only; the value is known to be below 1.
    pub(crate) const fn from_bps_unchecked(bps: u32) -> Self {
        Self(bps)
    }

    #[must_use]
    pub const fn bps(self) -> u32 {
        self.0
    }

    /// `floor(amount × rate)` in minor units.
    pub fn apply(self, amount: Money) -> ResultEngine<Money> {
        let scaled = i128::from(amount.minor()) * i128::from(self.0);
        let floored = scaled.div_euclid(i128::from(BPS_PER_UNIT));
        i64::try_from(floored)
            .map(Money::new)
            .map_err(|_| EngineError::InvalidAmount("amount too large".to_string()))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{whole}%")
        } else if frac % 10 == 0 {
            write!(f, "{whole}.{}%", frac / 10)
        } else {
            write!(f, "{whole}.{frac:02}%")
        }
    }
}

impl FromStr for Rate {
    type Err = EngineError;

    /// Parses `0.18`, `.1`, `18%` or `12.5%`.
    ///
    /// More precision than one basis point is rejected rather than rounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidRate(format!("invalid rate: {s}"));

        let trimmed = s.trim();
        let (digits, scale_digits) = match trimmed.strip_suffix('%') {
            Some(percent) => (percent.trim(), 2usize),
            None => (trimmed, 4usize),
        };
        if digits.is_empty() {
            return Err(invalid());
        }

        let (whole_str, frac_str) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac.trim_end_matches('0')),
            None => (digits, ""),
        };
        if whole_str.is_empty() && frac_str.is_empty() && !digits.contains('0') {
            return Err(invalid());
        }
        if !whole_str.chars().all(|c| c.is_ascii_digit())
            || !frac_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        if frac_str.len() > scale_digits {
            return Err(EngineError::InvalidRate(format!(
                "{s}: precision finer than one basis point"
            )));
        }

        let whole: u32 = if whole_str.is_empty() {
            0
        } else {
            whole_str.parse().map_err(|_| invalid())?
        };
        let frac: u32 = if frac_str.is_empty() {
            0
        } else {
            let padded = format!("{frac_str:0<scale_digits$}");
            padded.parse().map_err(|_| invalid())?
        };

        // Both scales land directly on basis points: 18.00% and 0.1800.
        let unit = 10u32.pow(scale_digits as u32);
        let bps = whole
            .checked_mul(unit)
            .and_then(|v| v.checked_add(frac))
            .ok_or_else(invalid)?;

        Rate::from_bps(bps)
    }
}

impl TryFrom<f64> for Rate {
    type Error = EngineError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(EngineError::InvalidRate(format!("invalid rate: {value}")));
        }
        let scaled = value * f64::from(BPS_PER_UNIT);
        let rounded = scaled.round();
        if (scaled - rounded).abs() > 1e-6 {
            return Err(EngineError::InvalidRate(format!(
                "{value}: precision finer than one basis point"
            )));
        }
        if rounded >= f64::from(BPS_PER_UNIT) {
            return Err(EngineError::InvalidRate(format!(
                "{value}: rate must be below 1"
            )));
        }
        Rate::from_bps(rounded as u32)
    }
}

impl From<Rate> for f64 {
    fn from(value: Rate) -> Self {
        f64::from(value.0) / f64::from(BPS_PER_UNIT)
    }
}

/// Accepted on-disk shapes: `rate = 0.18` or `rate = "18%"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RateRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<RateRepr> for Rate {
    type Error = EngineError;

    fn try_from(value: RateRepr) -> Result<Self, Self::Error> {
        match value {
            RateRepr::Number(n) => Rate::try_from(n),
            RateRepr::Text(s) => s.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fraction_and_percent() {
        assert_eq!("0.18".parse::<Rate>().unwrap().bps(), 1800);
        assert_eq!(".1".parse::<Rate>().unwrap().bps(), 1000);
        assert_eq!("0".parse::<Rate>().unwrap(), Rate::ZERO);
        assert_eq!("0.0".parse::<Rate>().unwrap(), Rate::ZERO);
        assert_eq!("18%".parse::<Rate>().unwrap().bps(), 1800);
        assert_eq!("12.5%".parse::<Rate>().unwrap().bps(), 1250);
        assert_eq!("0.1250".parse::<Rate>().unwrap().bps(), 1250);
    }

    #[test]
    fn parse_rejects_out_of_range_and_garbage() {
        assert!("1".parse::<Rate>().is_err());
        assert!("100%".parse::<Rate>().is_err());
        assert!("-0.1".parse::<Rate>().is_err());
        assert!("0.00001".parse::<Rate>().is_err());
        assert!("abc".parse::<Rate>().is_err());
        assert!("%".parse::<Rate>().is_err());
        assert!(".".parse::<Rate>().is_err());
    }

    #[test]
    fn from_bps_rejects_one() {
        assert!(Rate::from_bps(9_999).is_ok());
        assert!(matches!(
            Rate::from_bps(10_000),
            Err(EngineError::InvalidRate(_))
        ));
    }

    #[test]
    fn apply_floors() {
        let gst = Rate::from_bps(1800).unwrap();
        assert_eq!(gst.apply(Money::new(35910)).unwrap(), Money::new(6463));
        assert_eq!(Rate::ZERO.apply(Money::new(19900)).unwrap(), Money::ZERO);
    }

    #[test]
    fn from_float_rounds_to_bps() {
        assert_eq!(Rate::try_from(0.18).unwrap().bps(), 1800);
        assert_eq!(Rate::try_from(0.2).unwrap().bps(), 2000);
        assert!(Rate::try_from(1.0).is_err());
        assert!(Rate::try_from(f64::NAN).is_err());
    }

    #[test]
    fn display_as_percent() {
        assert_eq!(Rate::from_bps(1800).unwrap().to_string(), "18%");
        assert_eq!(Rate::from_bps(1250).unwrap().to_string(), "12.5%");
        assert_eq!(Rate::from_bps(1234).unwrap().to_string(), "12.34%");
    }

    #[test]
    fn deserializes_number_or_string() {
        let from_number: Rate = serde_json::from_str("0.15").unwrap();
        let from_text: Rate = serde_json::from_str("\"15%\"").unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "0.15");
    }
}
