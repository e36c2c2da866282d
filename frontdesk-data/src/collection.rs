use crate::error::DataError;
use frontdesk_cache::CacheKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cache namespace holding full collection listings.
pub const COLLECTIONS_NAMESPACE: &str = "collections";

/// The record collections behind the list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Patients,
    Appointments,
    Doctors,
    Medicines,
    Sales,
    Employees,
    Screens,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Self::Patients,
        Self::Appointments,
        Self::Doctors,
        Self::Medicines,
        Self::Sales,
        Self::Employees,
        Self::Screens,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patients => "patients",
            Self::Appointments => "appointments",
            Self::Doctors => "doctors",
            Self::Medicines => "medicines",
            Self::Sales => "sales",
            Self::Employees => "employees",
            Self::Screens => "screens",
        }
    }

    /// Cache key of this collection's full listing.
    #[must_use]
    pub fn cache_key(self) -> CacheKey {
        CacheKey::new(COLLECTIONS_NAMESPACE, self.as_str())
    }

    /// Listings that a write to this collection makes stale, itself included.
    ///
    /// Appointment rows embed patient and doctor names, a sale draws down
    /// medicine stock, and doctors are a view over employees.
    #[must_use]
    pub const fn invalidates(self) -> &'static [Collection] {
        match self {
            Self::Patients => &[Self::Patients, Self::Appointments],
            Self::Appointments => &[Self::Appointments, Self::Patients],
            Self::Doctors => &[Self::Doctors, Self::Appointments],
            Self::Medicines => &[Self::Medicines],
            Self::Sales => &[Self::Sales, Self::Medicines],
            Self::Employees => &[Self::Employees, Self::Doctors],
            Self::Screens => &[Self::Screens],
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DataError::UnknownCollection(s.to_string()))
    }
}
