//! EMV card profiles: create and update.

use super::TestCase;
use crate::fixture::Fixture;
use crate::models::{EmvCardProfileCreateRequest, EmvCardProfileUpdateRequest};

pub const ISSUER_ID: i64 = 8440;

/// Longer than the API's name limit.
pub const OVERLONG_NAME: &str =
    "sbfjhwbejhfbwejhfgwjehfghegfjwegvfhgvfhgwevfhgwevfhkgwevfhgwevfhgw";

pub fn create_positive() -> Vec<TestCase<EmvCardProfileCreateRequest>> {
    vec![TestCase::new(
        "EMV_CardProfiles_Create_Positive_Data",
        Fixture::new()
            .seed(|req: &mut EmvCardProfileCreateRequest| req.issuer_id = ISSUER_ID)
            .build(),
    )]
}

pub fn create_negative() -> Vec<TestCase<EmvCardProfileCreateRequest>> {
    vec![TestCase::new(
        "EMV_CardProfiles_Create_Negative_Data",
        Fixture::new()
            .seed(|req: &mut EmvCardProfileCreateRequest| {
                req.name = OVERLONG_NAME.to_string();
                req.issuer_id = ISSUER_ID;
            })
            .build(),
    )]
}

pub fn update_positive() -> Vec<TestCase<EmvCardProfileUpdateRequest>> {
    vec![TestCase::new(
        "EMV_CardProfiles_Update_Positive_Data",
        Fixture::new()
            .seed(|req: &mut EmvCardProfileUpdateRequest| req.issuer_id = ISSUER_ID)
            .build(),
    )]
}

pub fn update_negative() -> Vec<TestCase<EmvCardProfileUpdateRequest>> {
    vec![TestCase::new(
        "EMV_CardProfiles_Update_Negative_Data",
        Fixture::new()
            .seed(|req: &mut EmvCardProfileUpdateRequest| {
                req.name = OVERLONG_NAME.to_string();
                req.issuer_id = ISSUER_ID;
            })
            .build(),
    )]
}
