//! Common test utilities for populator testing.
//!
//! Request types shared across integration tests live in [`requests`]; this
//! module adds pattern assertions, a fixed clock and seeded random sources.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use regex::Regex;


/// Fixed instant most date assertions are anchored to.
pub fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// Deterministic random source.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `Auto_` followed by `letters` lowercase letters.
pub fn auto_tag_pattern(letters: usize) -> Regex {
    Regex::new(&format!(r"^Auto_[a-z]{{{}}}$", letters)).unwrap()
}

/// Auto-tagged address at `domain`.
pub fn email_pattern(domain: &str) -> Regex {
    Regex::new(&format!(r"^Auto_[a-z]{{5}}@{}$", regex::escape(domain))).unwrap()
}

/// Exactly ten decimal digits.
pub fn phone_pattern() -> Regex {
    Regex::new(r"^\d{10}$").unwrap()
}

/// Parse a `yyyy-MM-dd` string.
pub fn parse_date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("'{}' is not a yyyy-MM-dd date: {}", text, e))
}

/// Days between `now` and the date in `text`; negative for the past.
pub fn days_from(now: DateTime<Utc>, text: &str) -> i64 {
    (parse_date(text) - now.date_naive()).num_days()
}

/// Whether `instant` is `days` away from some moment in `[before, after]`.
pub fn shifted_between(
    instant: DateTime<Utc>,
    before: DateTime<Utc>,
    after: DateTime<Utc>,
    days: i64,
) -> bool {
    let offset = Duration::days(days);
    instant >= before + offset && instant <= after + offset
}

/// Assert that a string matches a pattern
#[macro_export]
macro_rules! assert_matches_pattern {
    ($value:expr, $pattern:expr) => {{
        let value: &str = $value.as_ref();
        let pattern = $pattern;
        assert!(
            pattern.is_match(value),
            "'{}' does not match {}",
            value,
            pattern.as_str()
        );
    }};
}

/// Assert that a `yyyy-MM-dd` string lies `min..=max` days from `now`
#[macro_export]
macro_rules! assert_days_from {
    ($now:expr, $value:expr, $min:expr, $max:expr) => {{
        let days = $crate::common::days_from($now, $value.as_ref());
        assert!(
            ($min..=$max).contains(&days),
            "'{}' is {} days from now, expected {}..={}",
            $value,
            days,
            $min,
            $max
        );
    }};
}
