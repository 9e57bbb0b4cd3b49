use chrono::{TimeZone, Utc};
use curbside_core::{
    AdmitError, FixedClock, OccupancyLevel, ParkingEntry, Registry, RegistryConfig, ReleaseError,
};

fn registry(capacity: i64) -> Registry {
    Registry::new(&RegistryConfig::new(capacity))
}

#[test]
fn admit_increments_occupancy_and_normalizes_plate() {
    let mut reg = registry(5);
    let entry = reg.admit("ab 123", "Alice").expect("admit should succeed");
    assert_eq!(entry.plate, "AB123");
    assert_eq!(entry.owner, "Alice");
    assert_eq!(reg.occupied(), 1);
    assert_eq!(reg.available(), 4);
}

#[test]
fn duplicate_plate_rejected_across_formatting_variants() {
    let mut reg = registry(5);
    reg.admit("ab 123", "Alice").unwrap();
    let err = reg.admit("AB123", "Bob").unwrap_err();
    assert_eq!(
        err,
        AdmitError::AlreadyParked {
            plate: "AB123".to_string()
        }
    );
    assert_eq!(reg.occupied(), 1, "failed admit must not change occupancy");
}

#[test]
fn admit_validation_order_scenario() {
    // capacity=2: abc/Al ok, ABC/Bo duplicate, xyz999/Cy ok, qqq/Di full.
    let mut reg = registry(2);
    assert!(reg.admit("abc", "Al").is_ok());
    assert_eq!(reg.occupied(), 1);
    assert!(matches!(
        reg.admit("ABC", "Bo"),
        Err(AdmitError::AlreadyParked { .. })
    ));
    assert!(reg.admit("xyz999", "Cy").is_ok());
    assert_eq!(reg.occupied(), 2);
    assert_eq!(
        reg.admit("qqq", "Di"),
        Err(AdmitError::LotFull { capacity: 2 })
    );
    assert_eq!(reg.occupied(), 2);
}

#[test]
fn invalid_inputs_rejected_before_capacity_check() {
    let mut reg = registry(5);
    assert!(matches!(
        reg.admit("a1", "Jo"),
        Err(AdmitError::InvalidPlate { .. })
    ));
    assert!(matches!(
        reg.admit("ab1", "J"),
        Err(AdmitError::InvalidOwner { .. })
    ));
    assert!(reg.is_empty());
}

#[test]
fn release_on_empty_lot_is_lot_empty_not_not_found() {
    let mut reg = registry(5);
    assert_eq!(reg.release("any"), Err(ReleaseError::LotEmpty));
}

#[test]
fn release_unknown_plate_is_not_found() {
    let mut reg = registry(5);
    reg.admit("abc", "Al").unwrap();
    assert_eq!(
        reg.release("zzz"),
        Err(ReleaseError::NotFound {
            plate: "ZZZ".to_string()
        })
    );
    assert_eq!(reg.occupied(), 1);
}

#[test]
fn release_restores_pre_admit_count() {
    let mut reg = registry(5);
    reg.admit("abc", "Al").unwrap();
    let before = reg.occupied();
    reg.admit("def", "Bo").unwrap();
    assert_eq!(reg.occupied(), before + 1);
    let (entry, _released_at) = reg.release("def").unwrap();
    assert_eq!(entry.plate, "DEF");
    assert_eq!(reg.occupied(), before);
}

#[test]
fn roster_is_most_recent_first_and_release_preserves_order() {
    let mut reg = registry(5);
    reg.admit("car1", "A1").unwrap();
    reg.admit("car2", "B2").unwrap();
    reg.admit("car3", "C3").unwrap();

    let plates: Vec<_> = reg.list_all().iter().map(|e| e.plate.as_str()).collect();
    assert_eq!(plates, ["CAR3", "CAR2", "CAR1"]);

    reg.release("car2").unwrap();
    let plates: Vec<_> = reg.list_all().iter().map(|e| e.plate.as_str()).collect();
    assert_eq!(plates, ["CAR3", "CAR1"]);
}

#[test]
fn find_reports_position_recomputed_after_releases() {
    let mut reg = registry(5);
    reg.admit("car1", "A1").unwrap();
    reg.admit("car2", "B2").unwrap();
    reg.admit("car3", "C3").unwrap();

    let (_, pos) = reg.find("car1").unwrap();
    assert_eq!(pos, 3);

    // Releasing an earlier entry shifts later positions: not stable, by
    // contract.
    reg.release("car2").unwrap();
    let (_, pos) = reg.find("car1").unwrap();
    assert_eq!(pos, 2);

    let (entry, pos) = reg.find(" car 3 ").unwrap();
    assert_eq!(entry.plate, "CAR3");
    assert_eq!(pos, 1);
}

#[test]
fn find_on_empty_lot_and_unknown_plate_is_none() {
    let mut reg = registry(5);
    assert!(reg.find("abc").is_none());
    reg.admit("abc", "Al").unwrap();
    assert!(reg.find("nope99").is_none());
}

#[test]
fn reset_empties_the_registry() {
    let mut reg = registry(5);
    reg.admit("abc", "Al").unwrap();
    reg.admit("def", "Bo").unwrap();
    reg.reset();
    assert!(reg.is_empty());
    assert_eq!(reg.occupied(), 0);
    // Plates are admissible again after a reset.
    assert!(reg.admit("abc", "Al").is_ok());
}

#[test]
fn contains_is_normalization_insensitive() {
    let mut reg = registry(5);
    reg.admit("ab 123", "Alice").unwrap();
    assert!(reg.contains("AB123"));
    assert!(reg.contains("a b 1 2 3"));
    assert!(!reg.contains("other1"));
}

#[test]
fn stats_levels_follow_threshold_priority() {
    // capacity=10: 9 admits -> NearlyFull (9 > 8), 10th -> Full.
    let mut reg = registry(10);
    for i in 0..9 {
        reg.admit(&format!("car{i}"), "Owner").unwrap();
    }
    assert_eq!(reg.stats().level, OccupancyLevel::NearlyFull);
    reg.admit("car9", "Owner").unwrap();

    let stats = reg.stats();
    assert_eq!(stats.level, OccupancyLevel::Full);
    assert_eq!(stats.occupied, 10);
    assert_eq!(stats.available, 0);
    assert!((stats.occupancy_ratio - 1.0).abs() < f64::EPSILON);
}

#[test]
fn fixed_clock_gives_deterministic_timestamps() {
    let instant = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let mut reg = Registry::with_clock(&RegistryConfig::new(3), Box::new(FixedClock::new(instant)));

    let entry = reg.admit("abc", "Al").unwrap();
    assert_eq!(entry.admitted_at, instant);

    let (released, released_at) = reg.release("abc").unwrap();
    assert_eq!(released.admitted_at, instant);
    assert_eq!(released_at, instant);
}

#[test]
fn roster_and_stats_serialize_to_json() {
    let instant = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let mut reg = Registry::with_clock(&RegistryConfig::new(4), Box::new(FixedClock::new(instant)));
    reg.admit("ab 123", "Alice").unwrap();

    // Field names and representations the shell's JSON export relies on.
    let json = serde_json::to_value(reg.list_all()).unwrap();
    assert_eq!(json[0]["plate"], "AB123");
    assert_eq!(json[0]["owner"], "Alice");

    let roster: Vec<ParkingEntry> = serde_json::from_value(json).unwrap();
    assert_eq!(roster[0].admitted_at, instant);

    let stats = serde_json::to_value(reg.stats()).unwrap();
    assert_eq!(stats["capacity"], 4);
    assert_eq!(stats["occupied"], 1);
    assert_eq!(stats["available"], 3);
    assert_eq!(stats["level"], "PlentyOfSpace");
}

#[test]
fn non_positive_capacity_falls_back_to_ten() {
    let reg = registry(-1);
    assert_eq!(reg.capacity(), 10);
    let reg = registry(0);
    assert_eq!(reg.capacity(), 10);
}
