//! Random value generators over an injectable RNG and clock.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use rand::rngs::ThreadRng;

/// Alphabet used for generated tokens.
pub const LETTERS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Format of synthesized date strings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const AUTO_PREFIX: &str = "Auto_";

/// Source of randomized field values.
///
/// Dates are computed relative to "now", which is read from the system clock
/// on every call unless the generator has been anchored with [`RandomData::at`].
///
/// # Examples
///
/// ```rust
/// use api_fixtures::synth::RandomData;
///
/// let mut data = RandomData::new();
/// let email = data.email("zensar.com");
/// assert!(email.starts_with("Auto_"));
/// assert!(email.ends_with("@zensar.com"));
/// ```
#[derive(Debug, Clone)]
pub struct RandomData<R = ThreadRng> {
    rng: R,
    now: Option<DateTime<Utc>>,
}

impl RandomData<ThreadRng> {
    /// Generator backed by the thread-local CSPRNG.
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for RandomData<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomData<R> {
    /// Generator backed by the given RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng, now: None }
    }

    /// Anchor date arithmetic to a fixed instant.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Current instant used for date arithmetic.
    pub fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }

    /// Lowercase alphabetic string of length `n`.
    pub fn letters(&mut self, n: usize) -> String {
        (0..n)
            .map(|_| LETTERS[self.rng.random_range(0..LETTERS.len())] as char)
            .collect()
    }

    /// `"Auto_"` followed by `n` letters.
    pub fn auto_tag(&mut self, n: usize) -> String {
        format!("{}{}", AUTO_PREFIX, self.letters(n))
    }

    /// Email address with a five-letter auto-tagged local part.
    pub fn email(&mut self, domain: &str) -> String {
        format!("{}@{}", self.auto_tag(5), domain)
    }

    /// `n` decimal digits.
    pub fn digits(&mut self, n: usize) -> String {
        (0..n)
            .map(|_| char::from(b'0' + self.rng.random_range(0..10u8)))
            .collect()
    }

    /// Today plus a uniform number of days in `[min_days, max_days]`.
    ///
    /// `min_days` is clamped to zero first, then `max_days` is raised to the
    /// clamped minimum. Offsets past chrono's range saturate at
    /// [`DateTime::MAX_UTC`].
    pub fn future_date(&mut self, min_days: i64, max_days: i64) -> String {
        let days = self.days_in(min_days, max_days);
        self.format_date(self.shifted(days))
    }

    /// Today minus a uniform number of days in `[min_days_ago, max_days_ago]`.
    ///
    /// Saturates at [`DateTime::MIN_UTC`].
    pub fn past_date(&mut self, min_days_ago: i64, max_days_ago: i64) -> String {
        let days = self.days_in(min_days_ago, max_days_ago);
        self.format_date(self.shifted(-days))
    }

    /// Instant `days` away from now (negative values go back in time),
    /// saturating at the ends of the representable range.
    pub fn shifted(&self, days: i64) -> DateTime<Utc> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.now().checked_add_signed(delta))
            .unwrap_or(if days < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            })
    }

    fn days_in(&mut self, min: i64, max: i64) -> i64 {
        let min = min.max(0);
        let max = max.max(min);
        self.rng.random_range(min..=max)
    }

    fn format_date(&self, instant: DateTime<Utc>) -> String {
        instant.format(DATE_FORMAT).to_string()
    }
}
