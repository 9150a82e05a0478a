//! Built-in endpoint test cases.

use crate::common::{email_pattern, init_logging};
use crate::assert_matches_pattern;
use api_fixtures::providers::{self, categories, client_profiles, hot_stamps, sla, users};
use serde_json::json;

#[test]
fn test_catalogue_serializes_every_case() {
    init_logging();
    let cases = providers::catalogue().unwrap();
    assert!(!cases.is_empty());
    assert!(cases.iter().all(|case| !case.name.is_empty()));
}

#[test]
fn test_users_create_negative_payload() {
    let case = users::create_negative().remove(0).to_json().unwrap();
    let payload = &case.payload;

    assert_eq!(payload["email"], "abcd@zensar.com");
    assert_eq!(payload["pclIds"], json!([13]));
    assert_eq!(payload["roleIds"], json!([5]));
    assert_eq!(payload["StatusId"], 1216);
    assert!(payload["firstName"].as_str().unwrap().starts_with("Auto_"));
}

#[test]
fn test_users_create_positive_email() {
    let user = users::create_positive().remove(0).payload;
    assert_matches_pattern!(user.email, email_pattern("zensar.com"));
}

#[test]
fn test_sla_negative_keeps_zero_days() {
    let sla = sla::create_negative().remove(0).payload;
    assert_eq!(sla.special_project_sladay, 0);
    assert_eq!(sla.card_program_id, 1298);
}

#[test]
fn test_negative_cases_keep_their_invalid_text() {
    assert_eq!(hot_stamps::update_negative()[0].payload.name, "");
    assert_eq!(client_profiles::create_negative()[0].payload.user_name, "");
    assert_eq!(categories::create_negative()[0].payload.name, "");
}

#[test]
fn test_find_matches_by_substring() {
    let cases = providers::find("HOTSTAMP").unwrap();
    let names: Vec<&str> = cases.iter().map(|case| case.name.as_str()).collect();
    assert!(names.contains(&"Positive_Data_CSHotStamp_Create"));
    assert!(names.contains(&"Positive_Data_HotStampdrp_Get_ById_13"));
    assert!(names.iter().all(|name| name.to_lowercase().contains("hotstamp")));
}
