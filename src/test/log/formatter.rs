use super::LogFormatter;
use crate::log::LogLevel;

#[test]
fn formats_level_tag_and_message() {
    let formatter = LogFormatter::new(false, true);
    assert_eq!(formatter.format(LogLevel::Info, "connecting"), "[INFO] connecting");
    assert_eq!(formatter.format(LogLevel::Error, "boom"), "[ERROR] boom");
}

#[test]
fn omits_level_tag_when_disabled() {
    let formatter = LogFormatter::new(false, false);
    assert_eq!(formatter.format(LogLevel::Warning, "raw message"), "raw message");
}

#[test]
fn prefixes_timestamp_when_enabled() {
    let formatter = LogFormatter::new(true, true);
    let line = formatter.format(LogLevel::Debug, "probing");

    assert!(line.ends_with("[DEBUG] probing"));
    assert!(line.len() > "[DEBUG] probing".len(), "timestamp prefix expected");
    assert!(line.chars().next().is_some_and(|c| c.is_ascii_digit()));
}
