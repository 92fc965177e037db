//! Compounding frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};

/// How many times per year interest is added to the balance.
///
/// The set is closed: only the four variants below exist, and arbitrary
/// integers cannot be turned into a frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    /// Annual compounding (1x per year)
    Annual,
    /// Semi-annual compounding (2x per year)
    SemiAnnual,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Monthly compounding (12x per year)
    Monthly,
}

impl CompoundingFrequency {
    /// All supported frequencies, least frequent first.
    pub const ALL: [Self; 4] = [
        Self::Annual,
        Self::SemiAnnual,
        Self::Quarterly,
        Self::Monthly,
    ];

    /// Returns the number of compounding periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annual => 1,
            CompoundingFrequency::SemiAnnual => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
        }
    }
}

impl TryFrom<u32> for CompoundingFrequency {
    type Error = DomainError;

    fn try_from(periods: u32) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.periods_per_year() == periods)
            .ok_or(DomainError::UnsupportedFrequency { periods })
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingFrequency::Annual => "Annual",
            CompoundingFrequency::SemiAnnual => "Semi-Annual",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}
