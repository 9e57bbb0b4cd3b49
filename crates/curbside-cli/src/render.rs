//! Human-readable rendering of registry output.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use curbside_core::{AdmitError, LotStats, ParkingEntry, Registry, ReleaseError};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn menu(out: &mut impl Write, capacity: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Curbside ({capacity} spots) ===")?;
    writeln!(out, "1. Admit vehicle")?;
    writeln!(out, "2. Release vehicle")?;
    writeln!(out, "3. List parked vehicles")?;
    writeln!(out, "4. Search by plate")?;
    writeln!(out, "5. Statistics")?;
    writeln!(out, "6. Export roster as JSON")?;
    writeln!(out, "7. Clear all")?;
    writeln!(out, "8. Quit")?;
    write!(out, "Choice: ")?;
    out.flush()
}

pub fn admitted(out: &mut impl Write, entry: &ParkingEntry) -> io::Result<()> {
    writeln!(
        out,
        "Admitted {} ({}), entry time {}",
        entry.plate,
        entry.owner,
        entry.admitted_at.format(TIME_FORMAT)
    )
}

pub fn released(
    out: &mut impl Write,
    entry: &ParkingEntry,
    released_at: DateTime<Utc>,
) -> io::Result<()> {
    writeln!(
        out,
        "Released {} ({}), entered {}, exited {}",
        entry.plate,
        entry.owner,
        entry.admitted_at.format(TIME_FORMAT),
        released_at.format(TIME_FORMAT)
    )
}

pub fn found(out: &mut impl Write, entry: &ParkingEntry, position: usize) -> io::Result<()> {
    writeln!(out, "Found {} ({})", entry.plate, entry.owner)?;
    writeln!(out, "  entry time: {}", entry.admitted_at.format(TIME_FORMAT))?;
    writeln!(out, "  position in roster: {position}")
}

pub fn availability(out: &mut impl Write, available: usize, capacity: usize) -> io::Result<()> {
    writeln!(out, "Available spots: {available}/{capacity}")
}

pub fn roster(out: &mut impl Write, registry: &Registry) -> io::Result<()> {
    let entries = registry.list_all();
    if entries.is_empty() {
        writeln!(out, "Lot is empty.")?;
        return availability(out, registry.available(), registry.capacity());
    }

    writeln!(out, "{:<5}{:<12}{:<20}Entry time", "#", "Plate", "Owner")?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{:<5}{:<12}{:<20}{}",
            i + 1,
            entry.plate,
            entry.owner,
            entry.admitted_at.format(TIME_FORMAT)
        )?;
    }
    writeln!(
        out,
        "Total parked: {}/{}",
        registry.occupied(),
        registry.capacity()
    )
}

pub fn stats(out: &mut impl Write, stats: &LotStats) -> io::Result<()> {
    writeln!(out, "Capacity:        {} spots", stats.capacity)?;
    writeln!(out, "Parked:          {} vehicles", stats.occupied)?;
    writeln!(out, "Available:       {} spots", stats.available)?;
    writeln!(out, "Occupancy:       {:.1}%", stats.occupancy_ratio * 100.0)?;
    writeln!(out, "Status:          {}", stats.level)
}

pub fn admit_error(out: &mut impl Write, err: &AdmitError) -> io::Result<()> {
    match err {
        AdmitError::LotFull { .. } => {
            writeln!(out, "{err}")?;
            writeln!(out, "Try again later or find alternative parking.")
        }
        _ => writeln!(out, "{err}"),
    }
}

pub fn release_error(out: &mut impl Write, err: &ReleaseError) -> io::Result<()> {
    writeln!(out, "{err}")
}
