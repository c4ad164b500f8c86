//! Settings validation and JSON compatibility.

use crate::settings::WorldSettings;

#[test]
fn defaults_validate() {
    assert!(WorldSettings::default().validate().is_ok());
}

#[test]
fn degenerate_parameters_are_rejected() {
    let mut s = WorldSettings::default();
    s.width_in_locations = 0;
    assert!(s.validate().is_err());

    let mut s = WorldSettings::default();
    s.location_height = 7;
    assert!(s.validate().is_err());

    let mut s = WorldSettings::default();
    s.edge_transition_width = -1;
    assert!(s.validate().is_err());
}

#[test]
fn settings_round_trip_through_json() {
    let s = WorldSettings {
        width_in_locations: 12,
        height_in_locations: 7,
        location_width: 64,
        location_height: 48,
        seed: 0xABCD_EF01,
        edge_transition_width: 6,
    };
    let json = serde_json::to_string(&s).unwrap();
    let back: WorldSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(back.width_in_locations, 12);
    assert_eq!(back.height_in_locations, 7);
    assert_eq!(back.location_width, 64);
    assert_eq!(back.location_height, 48);
    assert_eq!(back.seed, 0xABCD_EF01);
    assert_eq!(back.edge_transition_width, 6);
}

#[test]
fn old_files_without_newer_fields_still_load() {
    // Files written before the seed and edge-width fields existed.
    let json = r#"{
        "width_in_locations": 10,
        "height_in_locations": 10,
        "location_width": 50,
        "location_height": 50
    }"#;
    let s: WorldSettings = serde_json::from_str(json).unwrap();
    assert_eq!(s.seed, 0xD1CE);
    assert_eq!(s.edge_transition_width, 4);
    assert!(s.validate().is_ok());
}
