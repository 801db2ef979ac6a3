//! # Reference Year
//!
//! AfCFTA tariff schedules count elapsed years from the start of trading
//! under the Agreement, 1 January 2021. The engine takes the year a
//! calculation refers to as an explicit, request-scoped [`ReferenceYear`]
//! so that historical and forward-looking quotes are reproducible.
//!
//! [`ReferenceYear::current()`] is provided for outer surfaces (the CLI)
//! that want "today"; engine code never calls it.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// First calendar year of preferential trading under AfCFTA.
pub const AFCFTA_EPOCH_YEAR: i32 = 2021;

/// The calendar year a calculation is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceYear(i32);

impl ReferenceYear {
    /// Wrap a calendar year.
    pub const fn new(year: i32) -> Self {
        Self(year)
    }

    /// The current UTC calendar year.
    pub fn current() -> Self {
        Self(Utc::now().year())
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.0
    }

    /// Whole years elapsed since [`AFCFTA_EPOCH_YEAR`].
    ///
    /// Years before the epoch clamp to 0: no dismantling has happened yet.
    pub fn years_since_epoch(&self) -> u32 {
        u32::try_from(self.0.saturating_sub(AFCFTA_EPOCH_YEAR)).unwrap_or(0)
    }
}

impl From<i32> for ReferenceYear {
    fn from(year: i32) -> Self {
        Self(year)
    }
}

impl std::fmt::Display for ReferenceYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
