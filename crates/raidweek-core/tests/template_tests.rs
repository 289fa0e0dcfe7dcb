//! Tests for `{name}` placeholder substitution.

use std::collections::HashMap;

use raidweek_core::template::render;
use raidweek_core::ScheduleError;

/// Helper: build a value map from (name, value) pairs.
fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn substitutes_single_placeholder() {
    let out = render("raid at {time}", &values(&[("time", "19:00")])).unwrap();
    assert_eq!(out, "raid at 19:00");
}

#[test]
fn substitutes_repeated_and_multiple_placeholders() {
    let out = render(
        "{day} <t:{ts}:f> and again <t:{ts}:f>",
        &values(&[("day", "Wednesday"), ("ts", "1729123200")]),
    )
    .unwrap();
    assert_eq!(out, "Wednesday <t:1729123200:f> and again <t:1729123200:f>");
}

#[test]
fn passes_through_text_without_placeholders() {
    let template = "/quickcreate arguments:[template:02][channel:#bwl-signup]";
    let out = render(template, &values(&[])).unwrap();
    assert_eq!(out, template);
}

#[test]
fn missing_placeholder_errors_with_its_name() {
    let err = render("start <t:{bwl_timestamp}:f>", &values(&[])).unwrap_err();
    match err {
        ScheduleError::MissingPlaceholder(name) => assert_eq!(name, "bwl_timestamp"),
        other => panic!("expected MissingPlaceholder, got {other:?}"),
    }
}

#[test]
fn unterminated_placeholder_is_malformed() {
    let err = render("broken {date", &values(&[("date", "2024-10-16")])).unwrap_err();
    assert!(matches!(err, ScheduleError::MalformedTemplate(_)));
}

#[test]
fn bare_closing_brace_is_malformed() {
    let err = render("oops } here", &values(&[])).unwrap_err();
    assert!(matches!(err, ScheduleError::MalformedTemplate(_)));
}

#[test]
fn doubled_braces_escape_to_literals() {
    let out = render("literal {{braces}} and {value}", &values(&[("value", "x")])).unwrap();
    assert_eq!(out, "literal {braces} and x");
}

#[test]
fn empty_template_renders_empty() {
    assert_eq!(render("", &values(&[])).unwrap(), "");
}

#[test]
fn extra_values_are_ignored() {
    let out = render("{a}", &values(&[("a", "1"), ("unused", "2")])).unwrap();
    assert_eq!(out, "1");
}
