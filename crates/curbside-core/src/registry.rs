//! The occupancy registry.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::clock::{IClock, SystemClock};
use crate::config::RegistryConfig;
use crate::entry::ParkingEntry;
use crate::errors::{AdmitError, ReleaseError};
use crate::plate;
use crate::stats::LotStats;

/// Ordered collection of currently-parked vehicles, bounded by a fixed
/// capacity. New admissions go to the front, so the roster reads
/// most-recently-admitted first. Removal splices, preserving the relative
/// order of the remaining entries.
///
/// Single-threaded by design; callers in a concurrent context must
/// serialize access externally.
pub struct Registry {
    capacity: usize,
    /// Front = most recently admitted.
    entries: Vec<ParkingEntry>,
    /// Normalized plates currently present. Mirrors `entries`.
    occupied_plates: FxHashSet<String>,
    clock: Box<dyn IClock>,
}

impl Registry {
    /// Build a registry with the wall clock.
    pub fn new(config: &RegistryConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Build a registry with an injected clock, for deterministic tests.
    pub fn with_clock(config: &RegistryConfig, clock: Box<dyn IClock>) -> Self {
        let capacity = config.effective_capacity();
        info!(capacity, "registry created");
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
            occupied_plates: FxHashSet::default(),
            clock,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn occupied(&self) -> usize {
        self.entries.len()
    }

    pub fn available(&self) -> usize {
        self.capacity - self.entries.len()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a vehicle with this plate is parked, insensitive to
    /// whitespace and case in the input.
    pub fn contains(&self, raw_plate: &str) -> bool {
        self.occupied_plates.contains(&plate::normalize(raw_plate))
    }

    /// Admit a vehicle. Preconditions are checked in order: plate validity,
    /// owner validity, free capacity, no duplicate. On success the entry is
    /// placed at the front of the roster with a timestamp from the clock,
    /// and a copy of it is returned.
    pub fn admit(&mut self, raw_plate: &str, owner: &str) -> Result<ParkingEntry, AdmitError> {
        if !plate::is_valid_plate(raw_plate) {
            return Err(AdmitError::InvalidPlate {
                plate: raw_plate.to_string(),
            });
        }
        if !plate::is_valid_owner(owner) {
            return Err(AdmitError::InvalidOwner {
                name: owner.to_string(),
            });
        }
        if self.is_full() {
            return Err(AdmitError::LotFull {
                capacity: self.capacity,
            });
        }

        let normalized = plate::normalize(raw_plate);
        if self.occupied_plates.contains(&normalized) {
            return Err(AdmitError::AlreadyParked { plate: normalized });
        }

        let entry = ParkingEntry::new(normalized.clone(), owner.to_string(), self.clock.now());
        self.occupied_plates.insert(normalized);
        self.entries.insert(0, entry.clone());

        info!(
            plate = %entry.plate,
            occupied = self.entries.len(),
            capacity = self.capacity,
            "vehicle admitted"
        );
        Ok(entry)
    }

    /// Release a vehicle by plate. Scans the roster in stored order and
    /// removes the first normalized match, returning the removed entry and
    /// a release timestamp captured now.
    pub fn release(
        &mut self,
        raw_plate: &str,
    ) -> Result<(ParkingEntry, DateTime<Utc>), ReleaseError> {
        if self.entries.is_empty() {
            return Err(ReleaseError::LotEmpty);
        }

        let normalized = plate::normalize(raw_plate);
        let index = self
            .entries
            .iter()
            .position(|e| e.plate == normalized)
            .ok_or(ReleaseError::NotFound { plate: normalized })?;

        let entry = self.entries.remove(index);
        self.occupied_plates.remove(&entry.plate);
        let released_at = self.clock.now();
        info!(
            plate = %entry.plate,
            occupied = self.entries.len(),
            "vehicle released"
        );
        Ok((entry, released_at))
    }

    /// Find a vehicle by plate. Returns the entry plus its 1-based position
    /// in the current roster. The position is recomputed from the current
    /// ordering on every call, so it shifts when earlier entries are
    /// released.
    pub fn find(&self, raw_plate: &str) -> Option<(&ParkingEntry, usize)> {
        if self.entries.is_empty() {
            return None;
        }
        let normalized = plate::normalize(raw_plate);
        self.entries
            .iter()
            .enumerate()
            .find(|(_, e)| e.plate == normalized)
            .map(|(i, e)| (e, i + 1))
    }

    /// Read-only roster view, front-to-back (most recent first).
    pub fn list_all(&self) -> &[ParkingEntry] {
        &self.entries
    }

    /// Remove every entry. Irreversible; any confirmation gate belongs to
    /// the caller.
    pub fn reset(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.occupied_plates.clear();
        debug!(removed, "registry reset");
    }

    /// Current utilization snapshot.
    pub fn stats(&self) -> LotStats {
        LotStats::compute(self.entries.len(), self.capacity)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("capacity", &self.capacity)
            .field("occupied", &self.entries.len())
            .finish_non_exhaustive()
    }
}
