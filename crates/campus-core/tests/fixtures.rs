//! Integration tests for fixture loading from the embedded set and from disk.

use std::fs;

use campus_core::enums::{DonationPurpose, EventMode};
use campus_core::{CoreError, Fixtures};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn write_embedded_copy(dir: &std::path::Path) {
    let fixtures_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    for name in ["alumni.json", "events.json", "mentors.json", "donations.json"] {
        fs::copy(fixtures_dir.join(name), dir.join(name)).expect("copy fixture");
    }
}

#[test]
fn embedded_set_keeps_fixture_order() {
    let fixtures = Fixtures::load().expect("fixtures load");
    let names: Vec<&str> = fixtures.alumni.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Sarah Johnson",
            "Michael Chen",
            "Emily Rodriguez",
            "David Thompson",
            "Lisa Wang",
            "James Wilson",
        ]
    );
}

#[test]
fn only_the_workshop_is_registered_by_default() {
    let fixtures = Fixtures::load().expect("fixtures load");
    let seeded: Vec<&str> = fixtures
        .events
        .iter()
        .filter(|e| e.is_registered)
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(seeded, vec!["2"]);
}

#[rstest]
#[case("1", EventMode::Offline)]
#[case("2", EventMode::Online)]
#[case("3", EventMode::Offline)]
#[case("4", EventMode::Online)]
fn event_modes(#[case] id: &str, #[case] mode: EventMode) {
    let fixtures = Fixtures::load().expect("fixtures load");
    let event = fixtures.events.iter().find(|e| e.id == id).expect("event");
    assert_eq!(event.mode, mode);
}

#[test]
fn donation_purposes_and_anonymity() {
    let fixtures = Fixtures::load().expect("fixtures load");
    let purposes: Vec<DonationPurpose> = fixtures.donations.iter().map(|d| d.purpose).collect();
    assert_eq!(
        purposes,
        vec![
            DonationPurpose::Scholarship,
            DonationPurpose::Infrastructure,
            DonationPurpose::StudentActivities,
        ]
    );
    assert_eq!(fixtures.donations[0].display_donor(), "Anonymous Donor");
    assert_eq!(fixtures.donations[1].display_donor(), "Sarah Johnson");
}

#[test]
fn loads_from_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_embedded_copy(dir.path());

    let from_disk = Fixtures::load_from_dir(dir.path()).expect("load from dir");
    let embedded = Fixtures::load().expect("fixtures load");
    assert_eq!(from_disk, embedded);
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_embedded_copy(dir.path());
    fs::remove_file(dir.path().join("mentors.json")).expect("remove");

    let err = Fixtures::load_from_dir(dir.path()).expect_err("missing file should fail");
    match err {
        CoreError::Io { path, .. } => assert!(path.ends_with("mentors.json")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn duplicate_ids_on_disk_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_embedded_copy(dir.path());
    fs::write(
        dir.path().join("donations.json"),
        r#"[
            {"id":"7","amount":10,"purpose":"general","donor_name":"A","date":"2025-01-01","is_anonymous":false},
            {"id":"7","amount":20,"purpose":"research","donor_name":"B","date":"2025-01-02","is_anonymous":true}
        ]"#,
    )
    .expect("write");

    let err = Fixtures::load_from_dir(dir.path()).expect_err("duplicate should fail");
    assert!(matches!(err, CoreError::Validation(_)));
}
