//! Evaluation context: where a component is installed and how hard it works.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SurvivalError;

/// Installation location category.
///
/// `AboveGround` and `Overall` are the reference level: no location
/// coefficient is applied for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    #[serde(rename = "Above Ground")]
    AboveGround,
    Underground,
    Unknown,
    Overall,
}

impl LocationType {
    pub const ALL: [LocationType; 4] = [
        LocationType::AboveGround,
        LocationType::Underground,
        LocationType::Unknown,
        LocationType::Overall,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AboveGround => "Above Ground",
            Self::Underground => "Underground",
            Self::Unknown => "Unknown",
            Self::Overall => "Overall",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LocationType {
    type Err = SurvivalError;

    /// Accepts the upstream labels ignoring case, spaces, `_` and `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "aboveground" => Ok(Self::AboveGround),
            "underground" => Ok(Self::Underground),
            "unknown" => Ok(Self::Unknown),
            "overall" => Ok(Self::Overall),
            _ => Err(SurvivalError::InvalidArgument(format!(
                "unrecognized location type `{s}`"
            ))),
        }
    }
}

/// Caller-supplied scenario for one evaluation.
///
/// `usage_rate` is raw (not standardized), e.g. operations per day. `None`
/// evaluates at the population mean, i.e. no usage adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub usage_rate: Option<f64>,
    pub location: LocationType,
}

impl Scenario {
    pub fn new(usage_rate: f64, location: LocationType) -> Self {
        Self {
            usage_rate: Some(usage_rate),
            location,
        }
    }

    /// Scenario at the mean usage rate.
    pub fn at_mean_usage(location: LocationType) -> Self {
        Self {
            usage_rate: None,
            location,
        }
    }

    /// Rejects negative or non-finite usage rates.
    pub fn validate(&self) -> Result<(), SurvivalError> {
        match self.usage_rate {
            Some(u) if !u.is_finite() || u < 0.0 => Err(SurvivalError::InvalidArgument(format!(
                "usage rate must be a finite non-negative number, got {u}"
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_upstream_labels() {
        assert_eq!("Above Ground".parse::<LocationType>(), Ok(LocationType::AboveGround));
        assert_eq!("above_ground".parse::<LocationType>(), Ok(LocationType::AboveGround));
        assert_eq!("UNDERGROUND".parse::<LocationType>(), Ok(LocationType::Underground));
        assert_eq!("unknown".parse::<LocationType>(), Ok(LocationType::Unknown));
        assert_eq!("Overall".parse::<LocationType>(), Ok(LocationType::Overall));
        assert!(matches!(
            "Elevated".parse::<LocationType>(),
            Err(SurvivalError::InvalidArgument(_))
        ));
    }

    #[test]
    fn label_roundtrip() {
        for loc in LocationType::ALL {
            assert_eq!(loc.to_string().parse::<LocationType>(), Ok(loc));
        }
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&LocationType::AboveGround).expect("serialize");
        assert_eq!(json, "\"Above Ground\"");
    }

    #[test]
    fn negative_usage_rejected() {
        assert!(Scenario::new(-1.0, LocationType::Overall).validate().is_err());
        assert!(Scenario::new(f64::NAN, LocationType::Overall).validate().is_err());
        assert!(Scenario::new(0.0, LocationType::Overall).validate().is_ok());
        assert!(Scenario::at_mean_usage(LocationType::Unknown).validate().is_ok());
    }
}
