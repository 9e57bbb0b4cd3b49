//! Plate normalization and input validation.
//!
//! Every identifier comparison in the registry goes through [`normalize`]
//! first, so lookups are insensitive to whitespace and letter case in the
//! caller's input.

use crate::constants::{OWNER_MIN_LEN, PLATE_MAX_LEN, PLATE_MIN_LEN};

/// Normalize a raw plate string: strip all whitespace, uppercase the rest.
///
/// Pure and idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Whether a plate is acceptable: normalized length within bounds.
pub fn is_valid_plate(raw: &str) -> bool {
    let len = normalize(raw).chars().count();
    (PLATE_MIN_LEN..=PLATE_MAX_LEN).contains(&len)
}

/// Whether an owner name is acceptable: at least two characters.
pub fn is_valid_owner(name: &str) -> bool {
    name.chars().count() >= OWNER_MIN_LEN
}
