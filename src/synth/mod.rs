//! Randomized value synthesis for auto-filled fields.
//!
//! [`RandomData`] produces the name-shaped values the populator writes:
//! alphabetic tokens, email addresses, digit strings and ISO dates within
//! bounds. It is generic over any [`rand::Rng`]; the default source is the
//! thread-local CSPRNG from [`rand::rng`], so concurrent test threads never
//! share seed state.
//!
//! The free functions in this module are shorthands that draw from a fresh
//! thread-local generator on every call.

mod random_data;

pub use random_data::{DATE_FORMAT, LETTERS, RandomData};

/// Lowercase alphabetic string of length `n`.
pub fn random_letters(n: usize) -> String {
    RandomData::new().letters(n)
}

/// `"Auto_"` followed by `n` random letters.
pub fn auto_tag(n: usize) -> String {
    RandomData::new().auto_tag(n)
}

/// Synthesized email address at `domain`.
pub fn email(domain: &str) -> String {
    RandomData::new().email(domain)
}

/// `n` random decimal digits.
pub fn digits(n: usize) -> String {
    RandomData::new().digits(n)
}

/// Date between `min_days` and `max_days` days from today, as `yyyy-MM-dd`.
pub fn future_date(min_days: i64, max_days: i64) -> String {
    RandomData::new().future_date(min_days, max_days)
}

/// Date between `min_days_ago` and `max_days_ago` days before today, as `yyyy-MM-dd`.
pub fn past_date(min_days_ago: i64, max_days_ago: i64) -> String {
    RandomData::new().past_date(min_days_ago, max_days_ago)
}
