//! Classification labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ground-truth or predicted class of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Disposition {
    /// Confirmed planet
    Planet,
    /// Signal not caused by a planet
    FalsePositive,
}

impl Disposition {
    /// Label as it appears in the datasets
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planet => "PLANET",
            Self::FalsePositive => "FALSE_POSITIVE",
        }
    }

    /// Classify a score: strictly above `threshold` is a planet
    #[inline]
    #[must_use]
    pub fn from_score(score: f64, threshold: f64) -> Self {
        if score > threshold {
            Self::Planet
        } else {
            Self::FalsePositive
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label is neither `PLANET` nor `FALSE_POSITIVE`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown disposition '{0}'")]
pub struct UnknownDisposition(pub String);

impl FromStr for Disposition {
    type Err = UnknownDisposition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PLANET" => Ok(Self::Planet),
            "FALSE_POSITIVE" => Ok(Self::FalsePositive),
            other => Err(UnknownDisposition(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert_eq!(Disposition::from_score(0.5, 0.5), Disposition::FalsePositive);
        assert_eq!(Disposition::from_score(0.500_001, 0.5), Disposition::Planet);
        assert_eq!(Disposition::from_score(0.0, 0.5), Disposition::FalsePositive);
    }

    #[test]
    fn parse_labels() {
        assert_eq!("PLANET".parse::<Disposition>(), Ok(Disposition::Planet));
        assert_eq!(
            "FALSE_POSITIVE".parse::<Disposition>(),
            Ok(Disposition::FalsePositive)
        );
        assert!("CANDIDATE".parse::<Disposition>().is_err());
        assert!("planet".parse::<Disposition>().is_err());
    }

    #[test]
    fn serde_uses_dataset_labels() {
        let json = serde_json::to_string(&Disposition::FalsePositive).unwrap();
        assert_eq!(json, "\"FALSE_POSITIVE\"");
    }
}
