//! Tests for configuration loading and fail-fast validation.

use chrono::Weekday;
use raidweek_core::{Config, ScheduleError};

/// Helper: a minimal valid config document with one event.
fn minimal_json() -> String {
    r#"{
        "event_timezone": "US/Central",
        "display_timezone": "US/Eastern",
        "reset_weekday": "tuesday",
        "events": [
            {
                "key": "mc",
                "weekday": "wednesday",
                "time": "19:00",
                "command_template": "[date:{raid_discord_date}][time:{raid_discord_time}] {sr_link}"
            }
        ],
        "signup_links": { "mc": "https://example.invalid/sr/mc" },
        "schedule_template": "{mc_day} <t:{mc_timestamp}:f>"
    }"#
    .to_string()
}

#[test]
fn builtin_roster_has_seven_events_in_order() {
    let config = Config::builtin();
    let keys: Vec<&str> = config.events.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(
        keys,
        ["mc_na", "es", "bwl", "aq40", "naxx_day1", "naxx_day2", "mc_eu"]
    );
    assert_eq!(config.reset_weekday, Weekday::Tue);
    // Every event has a signup-link entry.
    for event in &config.events {
        assert!(config.signup_link(&event.key).is_ok());
    }
}

#[test]
fn parses_minimal_config() {
    let config = Config::from_json(&minimal_json()).unwrap();
    assert_eq!(config.events.len(), 1);
    let event = &config.events[0];
    assert_eq!(event.key, "mc");
    assert_eq!(event.slot.weekday(), Weekday::Wed);
    assert_eq!(event.slot.hour(), 19);
    assert_eq!(event.slot.minute(), 0);
    assert_eq!(config.signup_link("mc").unwrap(), "https://example.invalid/sr/mc");
}

#[test]
fn weekday_abbreviations_are_accepted() {
    let json = minimal_json().replace("\"wednesday\"", "\"wed\"");
    let config = Config::from_json(&json).unwrap();
    assert_eq!(config.events[0].slot.weekday(), Weekday::Wed);
}

#[test]
fn rejects_unknown_weekday() {
    let json = minimal_json().replace("\"wednesday\"", "\"wodin's day\"");
    let err = Config::from_json(&json).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidWeekday(_)));
}

#[test]
fn rejects_malformed_time() {
    let json = minimal_json().replace("\"19:00\"", "\"25:99\"");
    let err = Config::from_json(&json).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidTime(_)));
}

#[test]
fn rejects_unknown_timezone() {
    let json = minimal_json().replace("US/Central", "Mars/Olympus_Mons");
    let err = Config::from_json(&json).unwrap_err();
    match err {
        ScheduleError::InvalidTimezone(name) => assert_eq!(name, "Mars/Olympus_Mons"),
        other => panic!("expected InvalidTimezone, got {other:?}"),
    }
}

#[test]
fn rejects_event_without_signup_link() {
    // Leaves an empty (still valid JSON) signup_links object.
    let json = minimal_json().replace("\"mc\": \"https://example.invalid/sr/mc\"", "");
    let err = Config::from_json(&json).unwrap_err();
    assert!(matches!(err, ScheduleError::Config(_)));
}

#[test]
fn rejects_duplicate_event_keys() {
    let json = minimal_json().replace(
        "\"events\": [",
        r#""events": [
            {
                "key": "mc",
                "weekday": "monday",
                "time": "14:30",
                "command_template": "x"
            },"#,
    );
    let err = Config::from_json(&json).unwrap_err();
    match err {
        ScheduleError::Config(msg) => assert!(msg.contains("duplicate"), "got: {msg}"),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn rejects_empty_event_table() {
    let json = r#"{
        "event_timezone": "UTC",
        "display_timezone": "UTC",
        "reset_weekday": "tuesday",
        "events": [],
        "signup_links": {},
        "schedule_template": ""
    }"#;
    let err = Config::from_json(json).unwrap_err();
    assert!(matches!(err, ScheduleError::Config(_)));
}

#[test]
fn rejects_non_json_input() {
    let err = Config::from_json("not json {{{").unwrap_err();
    assert!(matches!(err, ScheduleError::Config(_)));
}
