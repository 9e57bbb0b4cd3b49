//! # curbside-core
//!
//! Occupancy registry for a fixed-capacity parking facility.
//! Defines the registry itself plus its types, errors, config, clock
//! abstraction, and tracing setup. The interactive shell lives in
//! `curbside-cli` and only calls through the public API here.

pub mod clock;
pub mod config;
pub mod constants;
pub mod entry;
pub mod errors;
pub mod plate;
pub mod registry;
pub mod setup;
pub mod stats;

// Re-export the most commonly used types at the crate root.
pub use clock::{FixedClock, IClock, SystemClock};
pub use config::RegistryConfig;
pub use entry::ParkingEntry;
pub use errors::{AdmitError, ConfigError, ReleaseError};
pub use registry::Registry;
pub use stats::{LotStats, OccupancyLevel};
