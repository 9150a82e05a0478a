//! Users: create, update and lookup by PCL.

use super::TestCase;
use crate::fixture::Fixture;
use crate::models::{UsersCreateRequest, UsersUpdateRequest};

fn create_seed(req: &mut UsersCreateRequest) {
    req.pcl_ids = Some(vec![13]);
    req.role_ids = Some(vec![5]);
    req.status_id = 1216;
}

pub fn create_positive() -> Vec<TestCase<UsersCreateRequest>> {
    vec![TestCase::new(
        "Users_Create_Positive_Data",
        Fixture::new().seed(create_seed).build(),
    )]
}

/// Email already registered in the target environment.
pub fn create_negative() -> Vec<TestCase<UsersCreateRequest>> {
    vec![TestCase::new(
        "Users_Create_Negative_Data",
        Fixture::new()
            .seed(create_seed)
            .seed(|req: &mut UsersCreateRequest| req.email = "abcd@zensar.com".to_string())
            .exclude("email")
            .build(),
    )]
}

pub fn update_positive() -> Vec<TestCase<UsersUpdateRequest>> {
    vec![TestCase::new(
        "Users_Update_Positive_Data",
        Fixture::new()
            .seed(|req: &mut UsersUpdateRequest| {
                req.status_code_id = 1216;
                req.middle_name = "AutoUpdates".to_string();
            })
            .build(),
    )]
}

/// No user id: the update targets nothing.
pub fn update_negative() -> Vec<TestCase<UsersUpdateRequest>> {
    vec![TestCase::new(
        "Users_Update_Negative_Data",
        Fixture::new()
            .seed(|req: &mut UsersUpdateRequest| {
                req.status_code_id = 1216;
                req.pcl_id_insert = Some(vec![13]);
                req.role_id_insert = Some(vec![5]);
            })
            .build(),
    )]
}

/// `(pclId, isInternal)`
pub fn get_by_pcl_valid() -> Vec<TestCase<(i64, bool)>> {
    vec![TestCase::new("Users_GetBy_ValidPclId", (13, true))]
}

pub fn get_by_pcl_invalid() -> Vec<TestCase<(i64, bool)>> {
    vec![TestCase::new("Users_GetBy_InValidPclId", (99999, true))]
}
