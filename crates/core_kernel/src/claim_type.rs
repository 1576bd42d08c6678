//! Line-of-business discriminator shared across the intake domains
//!
//! The claim type selects which detail fields, document requirements, and
//! policy filters apply. It is the one enum every domain crate speaks, so it
//! lives in the kernel alongside the identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three supported claim lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Health,
    Life,
    Car,
}

impl ClaimType {
    /// All supported claim types, in display order
    pub fn all() -> [ClaimType; 3] {
        [ClaimType::Health, ClaimType::Life, ClaimType::Car]
    }

    /// Stable lowercase tag used in API payloads and matching
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Health => "health",
            ClaimType::Life => "life",
            ClaimType::Car => "car",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a claim-type tag is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown claim type: {0}")]
pub struct UnknownClaimType(pub String);

impl FromStr for ClaimType {
    type Err = UnknownClaimType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "health" => Ok(ClaimType::Health),
            "life" => Ok(ClaimType::Life),
            "car" | "motor" => Ok(ClaimType::Car),
            other => Err(UnknownClaimType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_tags() {
        for ty in ClaimType::all() {
            let parsed: ClaimType = ty.as_str().parse().unwrap();
            assert_eq!(parsed, ty);
        }
    }

    #[test]
    fn test_motor_alias() {
        assert_eq!("Motor".parse::<ClaimType>().unwrap(), ClaimType::Car);
    }

    #[test]
    fn test_unknown_tag() {
        assert!("travel".parse::<ClaimType>().is_err());
    }
}
