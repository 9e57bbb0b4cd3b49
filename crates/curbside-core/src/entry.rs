//! A single currently-parked vehicle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One occupied spot. Created by [`crate::Registry::admit`], never mutated
/// afterwards; dropped on release or reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingEntry {
    /// Normalized plate (no whitespace, uppercase). Unique within a registry.
    pub plate: String,
    /// Owner name as entered.
    pub owner: String,
    /// When the vehicle was admitted.
    pub admitted_at: DateTime<Utc>,
}

impl ParkingEntry {
    pub(crate) fn new(plate: String, owner: String, admitted_at: DateTime<Utc>) -> Self {
        Self {
            plate,
            owner,
            admitted_at,
        }
    }
}
