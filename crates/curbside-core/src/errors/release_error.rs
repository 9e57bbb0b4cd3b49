//! Release errors.

/// Why a vehicle could not be released. An empty lot is reported
/// distinctly from a missing plate so the shell can phrase it differently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReleaseError {
    #[error("lot is empty: no vehicles to release")]
    LotEmpty,

    #[error("no vehicle with plate {plate} is parked here")]
    NotFound { plate: String },
}
