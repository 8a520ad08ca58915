//! Service Category Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle service category (bike / car)
///
/// Stored as lowercase TEXT; the same spelling is used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ServiceCategory {
    Bike,
    Car,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 2] = [ServiceCategory::Bike, ServiceCategory::Car];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bike => "bike",
            Self::Car => "car",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown category string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ServiceCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bike" => Ok(Self::Bike),
            "car" => Ok(Self::Car),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}
