//! Records, sequences, maps and absent branches.

use crate::common::requests::{Address, Card, CustomerRequest, Tier, WalletRequest};
use crate::common::{auto_tag_pattern, init_logging};
use crate::assert_matches_pattern;
use api_fixtures::populator::SkipReason;
use api_fixtures::{FillOptions, Fixture, FixtureError, PopulateReport, Populator, populate};
use std::collections::BTreeMap;

#[test]
fn test_nested_records_are_filled() {
    init_logging();
    let prepared = Fixture::<CustomerRequest>::new().build_with_report();
    let customer = prepared.value;

    assert_matches_pattern!(customer.name, auto_tag_pattern(5));
    assert_matches_pattern!(customer.home.street, auto_tag_pattern(5));
    assert!(customer.home.postal_code.is_some());
    assert_eq!(customer.tier, Tier::Basic);
    assert!(prepared.report.was_filled("home.postalCode"));
}

#[test]
fn test_absent_branches_are_default_constructed() {
    let prepared = Fixture::<CustomerRequest>::new().build_with_report();
    let customer = prepared.value;

    let billing = customer.billing.expect("billing constructed");
    assert!(billing.street.starts_with("Auto_"));
    assert_eq!(customer.role_ids, Some(Vec::new()));
    assert_eq!(prepared.report.constructed, vec!["billing", "roleIds"]);
    assert!(prepared.report.is_complete());
}

#[test]
fn test_present_optional_record_is_walked_not_replaced() {
    let customer = Fixture::<CustomerRequest>::new()
        .seed(|req| {
            req.billing = Some(Address {
                street: "1 Billing Way".to_string(),
                ..Address::default()
            })
        })
        .build();

    let billing = customer.billing.unwrap();
    assert_eq!(billing.street, "1 Billing Way");
    assert!(billing.city.starts_with("Auto_"));
}

#[test]
fn test_sequence_elements_keep_their_order() {
    let prepared = Fixture::<CustomerRequest>::new()
        .seed(|req| {
            req.addresses = vec![
                Address {
                    street: "Main".to_string(),
                    ..Address::default()
                },
                Address::default(),
                Address {
                    street: "Last".to_string(),
                    ..Address::default()
                },
            ]
        })
        .build_with_report();
    let addresses = prepared.value.addresses;

    assert_eq!(addresses.len(), 3);
    assert_eq!(addresses[0].street, "Main");
    assert!(addresses[1].street.starts_with("Auto_"));
    assert_eq!(addresses[2].street, "Last");
    assert!(prepared.report.was_filled("addresses[1].street"));
    assert!(!prepared.report.was_filled("addresses[0].street"));
}

#[test]
fn test_text_elements_are_left_alone() {
    let customer = Fixture::<CustomerRequest>::new()
        .seed(|req| req.tags = vec![String::new(), "vip".to_string()])
        .build();
    assert_eq!(customer.tags, vec!["", "vip"]);
}

#[test]
fn test_map_values_are_walked_by_key() {
    let mut branches = BTreeMap::new();
    branches.insert("north".to_string(), Address::default());
    branches.insert("south".to_string(), Address::default());

    let prepared = Fixture::<CustomerRequest>::new()
        .seed(move |req| req.branches = branches)
        .build_with_report();

    assert!(prepared.report.was_filled("branches[north].city"));
    assert!(prepared.report.was_filled("branches[south].street"));
    for address in prepared.value.branches.values() {
        assert!(address.city.starts_with("Auto_"));
    }
}

#[test]
fn test_unconstructible_branch_is_skipped() {
    let options = FillOptions::default();
    let mut wallet = WalletRequest::default();
    let report = Populator::new(&options).populate(&mut wallet);

    assert!(wallet.owner.starts_with("Auto_"));
    assert!(wallet.card.is_none());
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].path, "card");
    assert!(report.skipped[0].type_name.ends_with("Card"));
    assert_eq!(report.skipped[0].reason, SkipReason::NoDefaultConstructor);
}

#[test]
fn test_try_build_names_the_unresolved_field() {
    match Fixture::<WalletRequest>::new().try_build() {
        Err(FixtureError::UnresolvedField {
            type_name, field, ..
        }) => {
            assert_eq!(type_name, "WalletRequest");
            assert_eq!(field, "card");
        }
        other => panic!("expected unresolved field, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_seeded_branch_without_default_is_walked() {
    let wallet = Fixture::<WalletRequest>::new()
        .seed(|req| req.card = Some(Card::new("4111111111111111")))
        .try_build()
        .unwrap();

    let card = wallet.card.unwrap();
    assert_eq!(card.number, "4111111111111111");
    assert!(card.holder.starts_with("Auto_"));
}

#[test]
fn test_missing_target_is_a_noop() {
    let options = FillOptions::default();
    let report = Populator::new(&options).populate_optional(None);
    assert_eq!(report, PopulateReport::default());

    let mut customer = CustomerRequest::default();
    let report = populate(&mut customer, &options);
    assert!(!report.filled.is_empty());
}
