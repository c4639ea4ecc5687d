use chrono::{FixedOffset, NaiveDate, TimeZone};
use ramadan_clock::calendar::{Countdown, FastEvent, load_calendar, next_event, progress};
use ramadan_clock::commands::countdown::build_report;
use ramadan_clock::config;
use std::fs;
use tempfile::tempdir;

const CALENDAR_JSON: &str = r#"{
  "days": [
    { "date": "2026-02-18", "day": "Wednesday", "hijri": "1 Ramadan 1447",
      "sahur": "5:12 AM", "iftar": "5:41 PM", "duration": "12h 29m" },
    { "date": "2026-02-19", "day": "Thursday", "hijri": "2 Ramadan 1447",
      "sahur": "5:10 AM", "iftar": "5:43 PM", "duration": "12h 33m" },
    { "date": "2026-02-20", "day": "Friday", "hijri": "3 Ramadan 1447",
      "sahur": "5:09 AM", "iftar": "5:44 PM", "duration": "12h 35m" }
  ]
}"#;

/// Central Standard Time, fixed so the tests do not depend on the host zone
fn central() -> FixedOffset {
    FixedOffset::west_opt(6 * 3600).unwrap()
}

fn write_calendar(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("calendar.json");
    fs::write(&path, CALENDAR_JSON).unwrap();
    path
}

#[test]
fn test_countdown_to_suhoor_from_file() {
    let temp_dir = tempdir().unwrap();
    let days = load_calendar(&write_calendar(temp_dir.path())).unwrap();
    assert_eq!(days.len(), 3);
    assert_eq!(days[1].hijri, "2 Ramadan 1447");

    let now = central().with_ymd_and_hms(2026, 2, 19, 4, 0, 0).unwrap();
    let next = next_event(&days, &now).unwrap().unwrap();

    assert_eq!(next.event, FastEvent::Suhoor);
    assert_eq!(next.instant, central().with_ymd_and_hms(2026, 2, 19, 5, 10, 0).unwrap());

    let countdown = Countdown::between(&now, &next.instant);
    assert_eq!(countdown.to_string(), "01:10:00");
}

#[test]
fn test_countdown_moves_through_the_day() {
    let temp_dir = tempdir().unwrap();
    let days = load_calendar(&write_calendar(temp_dir.path())).unwrap();

    // Between Suhoor and Iftar the next boundary is the same day's Iftar
    let midday = central().with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap();
    let report = build_report(&days, &midday).unwrap();
    let next = report.next.unwrap();
    assert_eq!(next.event, FastEvent::Iftaar);
    assert_eq!(next.clock, "17:43");
    assert_eq!(next.remaining.to_string(), "05:43:00");

    // After Iftar it rolls to the next day's Suhoor
    let evening = central().with_ymd_and_hms(2026, 2, 19, 20, 30, 15).unwrap();
    let report = build_report(&days, &evening).unwrap();
    let next = report.next.unwrap();
    assert_eq!(next.event, FastEvent::Suhoor);
    assert_eq!(next.date, NaiveDate::from_ymd_opt(2026, 2, 20).unwrap());
    assert_eq!(next.remaining.to_string(), "08:38:45");
}

#[test]
fn test_countdown_after_last_iftar() {
    let temp_dir = tempdir().unwrap();
    let days = load_calendar(&write_calendar(temp_dir.path())).unwrap();

    let now = central().with_ymd_and_hms(2026, 2, 20, 18, 0, 0).unwrap();
    assert!(next_event(&days, &now).unwrap().is_none());

    let report = build_report(&days, &now).unwrap();
    assert_eq!(report.headline(), "Ramadan has ended");
}

#[test]
fn test_progress_from_file() {
    let temp_dir = tempdir().unwrap();
    let days = load_calendar(&write_calendar(temp_dir.path())).unwrap();

    let today = NaiveDate::from_ymd_opt(2026, 2, 19).unwrap();
    let progress = progress(&days, today);
    assert_eq!((progress.current, progress.total), (2, 3));
}

#[test]
fn test_bare_array_calendar() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("bare.json");
    fs::write(
        &path,
        r#"[{ "date": "2026-02-18", "sahur": "5:12 AM", "iftar": "5:41 PM" }]"#,
    )
    .unwrap();

    let days = load_calendar(&path).unwrap();
    assert_eq!(days.len(), 1);
    assert!(days[0].duration_label.is_empty());
}

#[test]
fn test_calendar_errors_name_the_file() {
    let temp_dir = tempdir().unwrap();

    let missing = temp_dir.path().join("missing.json");
    let err = load_calendar(&missing).unwrap_err();
    assert!(format!("{err:#}").contains("missing.json"));

    let unordered = temp_dir.path().join("unordered.json");
    fs::write(
        &unordered,
        r#"[{ "date": "2026-02-19", "sahur": "5:10 AM", "iftar": "5:43 PM" },
            { "date": "2026-02-18", "sahur": "5:12 AM", "iftar": "5:41 PM" }]"#,
    )
    .unwrap();
    let err = load_calendar(&unordered).unwrap_err();
    assert!(format!("{err:#}").contains("increasing order"));
}

#[test]
fn test_config_points_at_calendar_next_to_it() {
    let temp_dir = tempdir().unwrap();
    write_calendar(temp_dir.path());

    let config = config::load(Some(temp_dir.path())).unwrap();
    let days = load_calendar(&config.calendar_path()).unwrap();
    assert_eq!(days[0].sahur_time, "5:12 AM");
}
