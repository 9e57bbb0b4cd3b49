//! Admission errors.

/// Why a vehicle could not be admitted. Preconditions are checked in the
/// order the variants are declared; the first failure wins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdmitError {
    #[error("invalid plate {plate:?}: must be 3-10 characters after normalization")]
    InvalidPlate { plate: String },

    #[error("invalid owner name {name:?}: must be at least 2 characters")]
    InvalidOwner { name: String },

    #[error("lot is full: all {capacity} spots are occupied")]
    LotFull { capacity: usize },

    #[error("a vehicle with plate {plate} is already parked")]
    AlreadyParked { plate: String },
}
