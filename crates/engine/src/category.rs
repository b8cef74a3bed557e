use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Which static catalog a service id belongs to.
///
/// Ids are only meaningful paired with their category: the same id may exist
/// in both catalogs with unrelated prices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Wash,
    Mechanic,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 2] = [ServiceCategory::Wash, ServiceCategory::Mechanic];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wash => "wash",
            Self::Mechanic => "mechanic",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wash" => Ok(Self::Wash),
            "mechanic" => Ok(Self::Mechanic),
            other => Err(EngineError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case() {
        assert_eq!("Wash".parse::<ServiceCategory>(), Ok(ServiceCategory::Wash));
        assert_eq!(
            " MECHANIC ".parse::<ServiceCategory>(),
            Ok(ServiceCategory::Mechanic)
        );
    }

    #[test]
    fn parse_unknown_category() {
        assert_eq!(
            "detailing".parse::<ServiceCategory>(),
            Err(EngineError::UnknownCategory("detailing".to_string()))
        );
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&ServiceCategory::Mechanic).unwrap(),
            "\"mechanic\""
        );
    }
}
