//! Exclusion sets, idempotence and fill-when-empty.

use crate::common::requests::{CustomerRequest, SignupRequest, SubscriptionRequest};
use crate::common::{anchor, auto_tag_pattern, email_pattern};
use crate::assert_matches_pattern;
use api_fixtures::{FillOptions, Fixture, Populator, populate};
use chrono::Duration;

#[test]
fn test_exclusion_ignores_case() {
    let signup = Fixture::<SignupRequest>::new()
        .exclude("FIRSTNAME")
        .exclude("PhoneNumber")
        .build();

    assert_eq!(signup.first_name, "");
    assert_eq!(signup.phone_number, "");
    assert!(!signup.email.is_empty());
}

#[test]
fn test_exclusion_applies_at_every_depth() {
    let prepared = Fixture::<CustomerRequest>::new()
        .seed(|req| req.addresses = vec![Default::default()])
        .exclude("street")
        .build_with_report();
    let customer = prepared.value;

    assert_eq!(customer.home.street, "");
    assert_eq!(customer.addresses[0].street, "");
    assert!(!customer.home.city.is_empty());
    assert!(!customer.addresses[0].city.is_empty());
    assert!(prepared.report.excluded.contains(&"home.street".to_string()));
    assert!(prepared.report.excluded.contains(&"addresses[0].street".to_string()));
}

#[test]
fn test_excluded_record_is_not_walked() {
    let customer = Fixture::<CustomerRequest>::new().exclude("billing").build();
    assert_eq!(customer.billing, None);
    assert!(!customer.home.street.is_empty());
}

#[test]
fn test_second_pass_changes_nothing() {
    let options = FillOptions::default();
    let mut signup = SignupRequest::default();
    populate(&mut signup, &options);
    let first = signup.clone();

    let report = populate(&mut signup, &options);
    assert_eq!(signup, first);
    assert!(report.filled.is_empty());
}

#[test]
fn test_overwrite_mode_replaces_seeded_values() {
    let options = FillOptions::new().with_only_fill_when_empty(false);
    let mut signup = SignupRequest {
        first_name: "Alice".to_string(),
        email: "alice@corp.example".to_string(),
        status_id: 7,
        ..SignupRequest::default()
    };

    let report = Populator::new(&options).populate(&mut signup);

    assert_matches_pattern!(signup.first_name, auto_tag_pattern(5));
    assert_matches_pattern!(signup.email, email_pattern("zensar.com"));
    assert_eq!(signup.status_id, 7);
    assert_eq!(report.filled.len(), 5);
}

#[test]
fn test_overwrite_mode_respects_exclusion() {
    let options = FillOptions::new()
        .with_only_fill_when_empty(false)
        .exclude("email");
    let mut signup = SignupRequest {
        email: "alice@corp.example".to_string(),
        ..SignupRequest::default()
    };

    populate(&mut signup, &options);
    assert_eq!(signup.email, "alice@corp.example");
}

#[test]
fn test_overwrite_mode_replaces_native_dates() {
    let mut subscription = SubscriptionRequest {
        created_at: anchor() - Duration::days(400),
        ..SubscriptionRequest::default()
    };

    let options = FillOptions::new().with_only_fill_when_empty(false);
    let mut populator = Populator::with_data(
        &options,
        api_fixtures::RandomData::with_rng(crate::common::seeded_rng(5)).at(anchor()),
    );
    populator.populate(&mut subscription);

    assert_eq!(subscription.created_at, anchor() - Duration::days(7));
}
