//! Property-based checks of the synthesizer and populator.
//!
//! Uses proptest to vary lengths, day ranges, seeds and exclusion sets.

use crate::common::requests::SignupRequest;
use crate::common::{anchor, days_from, seeded_rng};
use api_fixtures::synth::RandomData;
use api_fixtures::{FillOptions, Fixture};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_letters_have_requested_length(n in 0usize..64, seed in any::<u64>()) {
        let letters = RandomData::with_rng(seeded_rng(seed)).letters(n);
        prop_assert_eq!(letters.len(), n);
        prop_assert!(letters.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn test_digits_have_requested_length(n in 0usize..64, seed in any::<u64>()) {
        let digits = RandomData::with_rng(seeded_rng(seed)).digits(n);
        prop_assert_eq!(digits.len(), n);
        prop_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_future_date_respects_clamped_range(
        min in -50i64..400,
        max in -50i64..400,
        seed in any::<u64>(),
    ) {
        let date = RandomData::with_rng(seeded_rng(seed)).at(anchor()).future_date(min, max);
        let low = min.max(0);
        let high = max.max(low);
        let days = days_from(anchor(), &date);
        prop_assert!(days >= low && days <= high, "{} days outside {}..={}", days, low, high);
    }

    #[test]
    fn test_past_date_respects_clamped_range(
        min in -50i64..400,
        max in -50i64..400,
        seed in any::<u64>(),
    ) {
        let date = RandomData::with_rng(seeded_rng(seed)).at(anchor()).past_date(min, max);
        let low = min.max(0);
        let high = max.max(low);
        let days = -days_from(anchor(), &date);
        prop_assert!(days >= low && days <= high, "{} days outside {}..={}", days, low, high);
    }

    #[test]
    fn test_population_is_idempotent(seed in any::<u64>(), exclude_email in any::<bool>()) {
        let mut options = FillOptions::default();
        if exclude_email {
            options = options.exclude("email");
        }
        let once = Fixture::<SignupRequest>::new()
            .options(options.clone())
            .at(anchor())
            .build_with_rng(seeded_rng(seed))
            .into_inner();

        let mut twice = once.clone();
        let report = api_fixtures::populate(&mut twice, &options);
        prop_assert_eq!(&twice, &once);
        prop_assert!(report.filled.is_empty());
    }

    #[test]
    fn test_excluded_seed_survives(seed_text in "[ a-zA-Z]{0,12}") {
        let expected = seed_text.clone();
        let signup = Fixture::<SignupRequest>::new()
            .seed(move |req| req.first_name = seed_text)
            .exclude("firstname")
            .build();
        prop_assert_eq!(signup.first_name, expected);
    }
}
