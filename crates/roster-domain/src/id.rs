//! Newtype wrappers for domain identifiers.
//!
//! Every persisted row is keyed by a UUID; the wrappers keep a department id
//! from being passed where a position id is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Fresh time-ordered id for a new row.
            pub fn generate() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

uuid_id!(
    /// Identifies a department.
    DepartmentId
);
uuid_id!(
    /// Identifies a position (job title).
    PositionId
);
uuid_id!(
    /// Identifies an employee.
    EmployeeId
);
uuid_id!(
    /// Identifies a piece of equipment.
    EquipmentId
);
uuid_id!(
    /// Identifies an employee specialization.
    SpecializationId
);
uuid_id!(
    /// Identifies an equipment category.
    EquipmentCategoryId
);
