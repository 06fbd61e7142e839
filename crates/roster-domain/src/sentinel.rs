//! Well-known fallback rows.
//!
//! Exactly one department acts as the Reserve: employees and equipment whose
//! department is deleted land there. Exactly one position acts as Unemployed:
//! employees whose position is deleted land there. Both rows carry a marker
//! in their `sentinel_role` column; the column is unique, so storage never
//! holds two rows with the same role.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentinelRole {
    ReserveDepartment,
    UnemployedPosition,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown sentinel role marker: {0}")]
pub struct UnknownSentinelRole(pub String);

impl SentinelRole {
    /// Value stored in the `sentinel_role` column.
    pub fn marker(self) -> &'static str {
        match self {
            Self::ReserveDepartment => "reserve",
            Self::UnemployedPosition => "unemployed",
        }
    }

    /// Name (department) or title (position) the sentinel row is created with.
    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::ReserveDepartment => "Reserve",
            Self::UnemployedPosition => "Unemployed",
        }
    }

    /// Names older data used for the same row. Normalized to
    /// [`canonical_name`](Self::canonical_name) by migration only.
    pub fn historical_names(self) -> &'static [&'static str] {
        match self {
            Self::ReserveDepartment => &["Резерв", "Global Reserve", "Unassigned"],
            Self::UnemployedPosition => &["Без Посади"],
        }
    }
}

impl fmt::Display for SentinelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

impl FromStr for SentinelRole {
    type Err = UnknownSentinelRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reserve" => Ok(Self::ReserveDepartment),
            "unemployed" => Ok(Self::UnemployedPosition),
            other => Err(UnknownSentinelRole(other.to_owned())),
        }
    }
}
