//! Error types, one file per domain.
//!
//! Every failure here is an expected, recoverable condition reported to the
//! caller as a value. Nothing in this crate panics or writes to an output
//! stream; rendering is the shell's job.

pub mod admit_error;
pub mod config_error;
pub mod release_error;

pub use admit_error::AdmitError;
pub use config_error::ConfigError;
pub use release_error::ReleaseError;
