//! Shared constants for the registry and its config defaults.

/// Capacity used when the configured value is non-positive.
pub const DEFAULT_CAPACITY: usize = 10;

/// Minimum plate length after normalization.
pub const PLATE_MIN_LEN: usize = 3;

/// Maximum plate length after normalization.
pub const PLATE_MAX_LEN: usize = 10;

/// Minimum owner name length.
pub const OWNER_MIN_LEN: usize = 2;

/// Occupancy fraction above which the lot is reported as nearly full.
pub const NEARLY_FULL_RATIO: f64 = 0.8;

/// Occupancy fraction above which the lot is reported as moderately busy.
pub const MODERATE_RATIO: f64 = 0.5;
