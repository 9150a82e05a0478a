//! chrono date fields.

use crate::common::requests::SubscriptionRequest;
use crate::common::{anchor, seeded_rng, shifted_between};
use api_fixtures::{FillOptions, Fixture, Populator, RandomData};
use chrono::{DateTime, Duration, NaiveDate, Utc};

#[test]
fn test_unset_dates_are_shifted_by_name() {
    let subscription = Fixture::<SubscriptionRequest>::new()
        .at(anchor())
        .build_with_rng(seeded_rng(11))
        .into_inner();

    assert_eq!(subscription.created_at, anchor() - Duration::days(7));
    assert_eq!(subscription.expires_at, Some(anchor() + Duration::days(30)));
    assert_eq!(
        subscription.renewal_date,
        (anchor() - Duration::days(7)).date_naive()
    );
    assert_eq!(
        subscription.card_expiry,
        Some((anchor() + Duration::days(30)).date_naive())
    );
    assert!(subscription.plan.starts_with("Auto_"));
}

#[test]
fn test_set_dates_are_kept() {
    let created = anchor() - Duration::days(90);
    let options = FillOptions::default();
    let mut subscription = SubscriptionRequest {
        created_at: created,
        expires_at: Some(created),
        ..SubscriptionRequest::default()
    };

    let report = Populator::with_data(&options, RandomData::with_rng(seeded_rng(2)).at(anchor()))
        .populate(&mut subscription);

    assert_eq!(subscription.created_at, created);
    assert_eq!(subscription.expires_at, Some(created));
    assert!(!report.was_filled("createdAt"));
    assert!(report.was_filled("renewalDate"));
}

#[test]
fn test_zero_values_inside_some_count_as_unset() {
    let prepared = Fixture::<SubscriptionRequest>::new()
        .seed(|req| {
            req.expires_at = Some(DateTime::<Utc>::default());
            req.card_expiry = Some(NaiveDate::default());
        })
        .options(FillOptions::new().with_only_fill_when_empty(true))
        .at(anchor())
        .build_with_rng(seeded_rng(4));
    let subscription = prepared.value;

    assert_eq!(subscription.expires_at, Some(anchor() + Duration::days(30)));
    assert_eq!(
        subscription.card_expiry,
        Some((anchor() + Duration::days(30)).date_naive())
    );
    assert!(prepared.report.was_filled("expiresAt"));
    assert!(prepared.report.was_filled("cardExpiry"));
}

#[test]
fn test_wall_clock_dates() {
    let before = Utc::now();
    let subscription = Fixture::<SubscriptionRequest>::new().build();
    let after = Utc::now();

    assert!(shifted_between(subscription.created_at, before, after, -7));
    assert!(shifted_between(
        subscription.expires_at.unwrap(),
        before,
        after,
        30
    ));
}
