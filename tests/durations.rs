//! 시간 표현/해석 회귀 테스트.
use std::time::{Duration, UNIX_EPOCH};

use humanize_toolbox::units::{DAY, HOUR, MINUTE};
use humanize_toolbox::{HumanizeError, Humanizer, LanguageRegistry};

fn humanizer(code: &str) -> Humanizer {
    Humanizer::new(&LanguageRegistry::new(), code).unwrap()
}

#[test]
fn parse_sentence_with_several_units() {
    let h = humanizer("en");
    let d = h.parse_duration("2 days and 5 hours").unwrap();
    assert_eq!(d, Duration::from_secs((2 * DAY + 5 * HOUR) as u64));
}

#[test]
fn parse_fractional_units() {
    let h = humanizer("en");
    assert_eq!(h.parse_duration("1.5 hours").unwrap(), Duration::from_secs(5400));
    assert_eq!(h.parse_duration("0,5 second").unwrap(), Duration::from_millis(500));
}

#[test]
fn parse_without_units_fails() {
    let h = humanizer("en");
    assert!(matches!(
        h.parse_duration("wrong duration"),
        Err(HumanizeError::NoMatch(_))
    ));
}

#[test]
fn precise_mode_skips_weeks() {
    let h = humanizer("en");
    assert_eq!(h.humanize_duration(16 * DAY, false), "2 weeks");
    assert_eq!(h.humanize_duration(16 * DAY, true), "16 days");
    assert_eq!(
        h.humanize_duration(DAY + 2 * HOUR + 3 * MINUTE + 4, true),
        "1 day, 2 hours, 3 minutes and 4 seconds"
    );
}

#[test]
fn diff_between_system_times() {
    let h = humanizer("en");
    let start = UNIX_EPOCH + Duration::from_secs(1_000_000);
    let end = start + Duration::from_secs(3 * HOUR as u64);
    assert_eq!(h.time_diff_system(start, end, false), "in 3 hours");
    assert_eq!(h.time_diff_system(end, start, false), "3 hours ago");
    assert_eq!(h.time_diff(10, 10, true), "now");
}

#[test]
fn polish_diff() {
    let h = humanizer("pl");
    assert_eq!(h.time_diff(0, 22 * MINUTE, false), "za 22 minuty");
    assert_eq!(h.time_diff(5 * MINUTE, 0, false), "5 minut temu");
}
