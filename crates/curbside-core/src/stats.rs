//! Derived utilization statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MODERATE_RATIO, NEARLY_FULL_RATIO};

/// Coarse utilization label, evaluated in priority order: a full lot is
/// `Full` even though it also exceeds the nearly-full threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OccupancyLevel {
    Full,
    NearlyFull,
    Moderate,
    PlentyOfSpace,
}

impl OccupancyLevel {
    /// Classify an occupancy count against a capacity.
    pub fn for_occupancy(occupied: usize, capacity: usize) -> Self {
        if occupied == capacity {
            Self::Full
        } else if occupied as f64 > NEARLY_FULL_RATIO * capacity as f64 {
            Self::NearlyFull
        } else if occupied as f64 > MODERATE_RATIO * capacity as f64 {
            Self::Moderate
        } else {
            Self::PlentyOfSpace
        }
    }
}

impl fmt::Display for OccupancyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Full => "FULL",
            Self::NearlyFull => "Nearly Full",
            Self::Moderate => "Moderate",
            Self::PlentyOfSpace => "Plenty of Space",
        };
        f.write_str(label)
    }
}

/// Snapshot of lot utilization at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotStats {
    pub capacity: usize,
    pub occupied: usize,
    pub available: usize,
    /// Fraction in [0.0, 1.0]; the shell formats it as a percentage.
    pub occupancy_ratio: f64,
    pub level: OccupancyLevel,
}

impl LotStats {
    pub(crate) fn compute(occupied: usize, capacity: usize) -> Self {
        Self {
            capacity,
            occupied,
            available: capacity - occupied,
            occupancy_ratio: occupied as f64 / capacity as f64,
            level: OccupancyLevel::for_occupancy(occupied, capacity),
        }
    }
}
