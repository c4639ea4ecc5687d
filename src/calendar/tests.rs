use super::*;
use chrono::{Duration, FixedOffset, NaiveDate, TimeZone, Timelike};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A fixed-offset zone so tests don't depend on the host's zone.
fn zone() -> FixedOffset {
    FixedOffset::west_opt(6 * 3600).unwrap()
}

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
    zone().with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn three_days() -> Vec<CalendarDay> {
    vec![
        CalendarDay::new(date(2026, 3, 19), "5:12 AM", "7:44 PM"),
        CalendarDay::new(date(2026, 3, 20), "5:10 AM", "7:45 PM"),
        CalendarDay::new(date(2026, 3, 21), "5:08 AM", "7:46 PM"),
    ]
}

#[test]
fn test_next_event_prefers_suhoor_before_dawn() {
    let days = vec![CalendarDay::new(date(2026, 3, 20), "5:10 AM", "7:45 PM")];
    let next = next_event(&days, &local(2026, 3, 20, 4, 0)).unwrap().unwrap();

    assert_eq!(next.event, FastEvent::Suhoor);
    assert_eq!(next.instant, local(2026, 3, 20, 5, 10));
    assert_eq!(next.day_index, 0);
}

#[test]
fn test_next_event_moves_to_iftar_after_dawn() {
    let days = three_days();
    let next = next_event(&days, &local(2026, 3, 20, 12, 0)).unwrap().unwrap();

    assert_eq!(next.event, FastEvent::Iftaar);
    assert_eq!(next.instant, local(2026, 3, 20, 19, 45));
    assert_eq!(next.day_index, 1);
}

#[test]
fn test_next_event_rolls_into_next_day() {
    let days = three_days();
    let next = next_event(&days, &local(2026, 3, 20, 21, 0)).unwrap().unwrap();

    assert_eq!(next.event, FastEvent::Suhoor);
    assert_eq!(next.instant, local(2026, 3, 21, 5, 8));
    assert_eq!(next.day_index, 2);
}

#[test]
fn test_next_event_is_strictly_after_now() {
    let days = three_days();
    let next = next_event(&days, &local(2026, 3, 20, 19, 45)).unwrap().unwrap();
    assert_eq!(next.instant, local(2026, 3, 21, 5, 8));
}

#[test]
fn test_next_event_none_once_calendar_is_over() {
    let days = vec![CalendarDay::new(date(2026, 3, 20), "5:10 AM", "7:45 PM")];
    assert!(next_event(&days, &local(2026, 3, 20, 23, 0)).unwrap().is_none());
    assert!(next_event(&[], &local(2026, 3, 20, 23, 0)).unwrap().is_none());
}

#[test]
fn test_next_event_surfaces_malformed_times() {
    let days = vec![CalendarDay::new(date(2026, 3, 20), "5:10", "7:45 PM")];
    let err = next_event(&days, &local(2026, 3, 20, 1, 0)).unwrap_err();
    assert!(matches!(err, ParseTimeError::Malformed { .. }));
}

#[test]
fn test_past_malformed_day_still_blocks_scan() {
    // Every day is checked in order, so a bad entry is reported even if it is in the past
    let mut days = three_days();
    days[0].iftar_time = "late".to_string();
    assert!(next_event(&days, &local(2026, 3, 21, 0, 0)).is_err());
}

#[test]
fn test_countdown_breakdown() {
    let now = local(2026, 3, 20, 4, 0);
    let target = local(2026, 3, 20, 5, 10) + Duration::seconds(5);
    let countdown = Countdown::between(&now, &target);

    assert_eq!(
        countdown,
        Countdown {
            hours: 1,
            minutes: 10,
            seconds: 5
        }
    );
    assert_eq!(countdown.to_string(), "01:10:05");
    assert_eq!(countdown.total_seconds(), 4205);
}

#[test]
fn test_countdown_floors_and_never_goes_negative() {
    let now = local(2026, 3, 20, 4, 0);
    let almost = now + Duration::milliseconds(1999);
    assert_eq!(Countdown::between(&now, &almost).to_string(), "00:00:01");

    let past = now - Duration::minutes(5);
    assert_eq!(Countdown::between(&now, &past).total_seconds(), 0);

    let far = now + Duration::hours(30);
    assert_eq!(Countdown::between(&now, &far).to_string(), "30:00:00");
}

#[test]
fn test_parse_calendar_wrapped_and_bare() {
    let wrapped = r#"{
        "days": [
            { "date": "2026-02-18", "day": "Wednesday", "hijri": "1 Ramadan 1447",
              "sahur": "5:32 AM", "iftar": "5:41 PM", "duration": "12h 9m" },
            { "date": "2026-02-19", "day": "Thursday", "hijri": "2 Ramadan 1447",
              "sahur": "5:31 AM", "iftar": "5:42 PM", "duration": "12h 11m" }
        ],
        "dua": null
    }"#;
    let days = parse_calendar(wrapped).unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].weekday, "Wednesday");
    assert_eq!(days[1].duration_label, "12h 11m");
    assert_eq!(days[1].sahur_at(&zone()).unwrap().hour(), 5);

    let bare = r#"[{ "date": "2026-02-18", "sahur": "5:32 AM", "iftar": "5:41 PM" }]"#;
    let days = parse_calendar(bare).unwrap();
    assert_eq!(days[0].hijri, "");
    assert_eq!(days[0].iftar_time, "5:41 PM");
}

#[test]
fn test_parse_calendar_rejects_out_of_order_dates() {
    let json = r#"[
        { "date": "2026-02-19", "sahur": "5:31 AM", "iftar": "5:42 PM" },
        { "date": "2026-02-18", "sahur": "5:32 AM", "iftar": "5:41 PM" }
    ]"#;
    let err = parse_calendar(json).unwrap_err();
    assert!(err.to_string().contains("increasing order"));
}

#[test]
fn test_parse_calendar_rejects_missing_times() {
    assert!(parse_calendar(r#"[{ "date": "2026-02-19" }]"#).is_err());
    assert!(parse_calendar("not json").is_err());
}

#[test]
fn test_progress_and_day_status() {
    let days = three_days();

    let during = progress(&days, date(2026, 3, 20));
    assert_eq!(during, FastingProgress { current: 2, total: 3 });
    assert!(during.is_fasting_day());
    assert!((during.percent() - 66.666).abs() < 0.01);

    let after = progress(&days, date(2026, 4, 1));
    assert_eq!(after.current, 0);
    assert_eq!(after.percent(), 0.0);

    assert_eq!(progress(&[], date(2026, 3, 20)).percent(), 0.0);

    let today = date(2026, 3, 20);
    let statuses: Vec<_> = days.iter().map(|d| day_status(d, today)).collect();
    assert_eq!(
        statuses,
        vec![DayStatus::Past, DayStatus::Today, DayStatus::Upcoming]
    );
}
