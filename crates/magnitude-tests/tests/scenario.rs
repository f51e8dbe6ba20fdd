//! End-to-end report scenarios.
//!
//! The fixtures under `tests/fixtures/` are reference renderings of the
//! default distribution at week 0 and week 10.

use std::io::Write;

use magnitude_core::config::NominationConfig;
use magnitude_core::exclusive::calculate_exclusive_counts;
use magnitude_core::types::default_distribution;
use magnitude_report::Report;
use magnitude_tests::helpers::*;

const WEEK0_REPORT: &str = include_str!("fixtures/week0_report.txt");
const WEEK10_REPORT: &str = include_str!("fixtures/week10_report.txt");

#[test]
fn default_exclusive_counts() {
    let exclusive = calculate_exclusive_counts(&default_distribution());
    let pairs: Vec<(&str, u64)> = exclusive
        .iter()
        .map(|t| (t.name.as_str(), t.count))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Verified", 46_349),
            ("Magnitude 1.0", 964),
            ("Magnitude 2.0", 31),
            ("Magnitude 3.0", 1),
            ("Magnitude 4.0", 0),
            ("Magnitude 5.0", 0),
            ("Magnitude 6.0", 0),
            ("Magnitude 7.0", 0),
            ("Magnitude 8.0", 0),
            ("Magnitude 9.0", 0),
        ]
    );
}

#[test]
fn week0_report_matches_reference() {
    let report = Report::build(&NominationConfig::default()).unwrap();
    assert_eq!(report.render_text(), WEEK0_REPORT);
}

#[test]
fn week10_report_matches_reference() {
    let report = Report::build(&config_at_week(10)).unwrap();
    assert_eq!(report.render_text(), WEEK10_REPORT);
}

#[test]
fn week10_targets_follow_flatter_curve() {
    // inertia 14, dropoff 4.8
    let report = Report::build(&config_at_week(10)).unwrap();
    assert!((report.dropoff - 4.8).abs() < 1e-9);
    let first = &report.nominations[0];
    assert_eq!(first.nomination.target, 9_656);
    assert_eq!(first.nomination.nominations_per_member, 1_241);
}

#[test]
fn campaign_end_dropoff_is_two() {
    for week in [24, 25, 100] {
        let report = Report::build(&config_at_week(week)).unwrap();
        assert_eq!(report.dropoff, 2.0, "week {week}");
    }
}

#[test]
fn targets_grow_as_campaign_progresses() {
    let early = Report::build(&config_at_week(0)).unwrap();
    let late = Report::build(&config_at_week(20)).unwrap();
    for (e, l) in early.nominations.iter().zip(&late.nominations) {
        assert!(
            e.nomination.target <= l.nomination.target,
            "{}: {} > {}",
            e.name,
            e.nomination.target,
            l.nomination.target
        );
    }
}

#[test]
fn inconsistent_distribution_still_reports() {
    // Magnitude 3 larger than Magnitude 2: clamped, no failure.
    let cfg = config_with(&[1_000, 50, 5, 20], 7, 0);
    let report = Report::build(&cfg).unwrap();
    assert_eq!(report.exclusive.counts(), vec![1_000, 45, 0, 20]);
    assert!(report.render_text().contains("Magnitude 2.0                 0\n"));
}

#[test]
fn config_file_drives_report() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
assembly_size = 2
weeks_total = 10
weeks_passed = 10

[[distribution]]
name = "Verified"
count = 400

[[distribution]]
name = "Bronze"
count = 20

[[distribution]]
name = "Silver"
count = 5
"#
    )
    .unwrap();

    let cfg = NominationConfig::load(Some(file.path())).unwrap();
    let report = Report::build(&cfg).unwrap();

    // dropoff 2.0: targets 200 and 100; exclusive Bronze 15, Silver 5.
    assert_eq!(report.nominations[0].name, "Bronze");
    assert_eq!(report.nominations[0].nomination.target, 200);
    assert_eq!(report.nominations[0].nomination.nominations_per_member, 92);
    assert_eq!(report.nominations[1].nomination.target, 100);
    assert_eq!(report.nominations[1].nomination.nominations_per_member, 47);
}

#[test]
fn json_report_round_trips_numbers() {
    let report = Report::build(&NominationConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    let quotas: Vec<u64> = value["nominations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["nominations_per_member"].as_u64().unwrap())
        .collect();
    assert_eq!(quotas, vec![836, 138, 20, 3, 0, 0, 0, 0, 0]);
}
