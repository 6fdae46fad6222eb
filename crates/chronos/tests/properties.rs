//! Property tests over arbitrary reference instants.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chronos::{parse, RecognizedDate};
use proptest::prelude::*;

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Instants between 1900 and 2200.
fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (-2_208_988_800i64..7_258_118_400i64)
        .prop_map(|secs| DateTime::from_timestamp(secs, 0).unwrap())
}

fn single_date(text: &str, reference: DateTime<Utc>) -> NaiveDate {
    let out = parse(Some(text), Some(reference));
    assert_eq!(out.len(), 1, "text: {text}");
    match out[0] {
        RecognizedDate::Date(d) => d,
        RecognizedDate::DateTime(dt) => panic!("unexpected date-time {dt}"),
    }
}

proptest! {
    #[test]
    fn prop_parse_is_deterministic(reference in instant(), text in "[a-z0-9 :-]{0,40}") {
        prop_assert_eq!(
            parse(Some(text.as_str()), Some(reference)),
            parse(Some(text.as_str()), Some(reference))
        );
    }

    #[test]
    fn prop_named_day_offsets(reference in instant()) {
        let today = reference.date_naive();
        for (text, offset) in [
            ("today", 0),
            ("yesterday", -1),
            ("tomorrow", 1),
            ("day before yesterday", -2),
            ("day after tomorrow", 2),
        ] {
            prop_assert_eq!(single_date(text, reference), today + Duration::days(offset));
        }
    }

    #[test]
    fn prop_magnitude_is_symmetric(reference in instant(), n in 0i64..500) {
        let today = reference.date_naive();
        let ahead = single_date(&format!("in {n} weeks"), reference);
        let behind = single_date(&format!("{n} weeks ago"), reference);
        prop_assert_eq!(ahead - today, today - behind);
        prop_assert_eq!((ahead - today).num_days(), n * 7);
    }

    #[test]
    fn prop_last_weekday_is_in_the_past_week(reference in instant(), target in 0usize..7) {
        let today = reference.date_naive();
        let d = single_date(&format!("last {}", WEEKDAYS[target]), reference);
        let back = (today - d).num_days();
        prop_assert!((1..=7).contains(&back), "went back {} days", back);
    }

    #[test]
    fn prop_next_weekday_lands_on_target_or_reference_week(reference in instant(), target in 0usize..7) {
        let today = reference.date_naive();
        let d = single_date(&format!("next {}", WEEKDAYS[target]), reference);
        prop_assert_eq!(d.weekday().num_days_from_monday() as usize, target);
        let ahead = (d - today).num_days();
        prop_assert!((-6..=13).contains(&ahead) && ahead != 0, "moved {} days", ahead);
    }

    #[test]
    fn prop_holidays_track_reference_year(reference in instant()) {
        let year = reference.year();
        prop_assert_eq!(
            single_date("christmas", reference),
            NaiveDate::from_ymd_opt(year, 12, 25).unwrap()
        );
        prop_assert_eq!(
            single_date("new year", reference),
            NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
        );
    }
}
