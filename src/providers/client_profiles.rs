//! Client settings client profiles: create, update, master data and delete.

use super::TestCase;
use crate::fixture::Fixture;
use crate::models::{
    ClientProfileCreateRequest, ClientProfileDeleteRequest, ClientProfileUpdateRequest,
};

pub fn create_positive() -> Vec<TestCase<ClientProfileCreateRequest>> {
    vec![TestCase::new(
        "CSClientProfile_Create_Positive_Data",
        Fixture::new()
            .seed(|req: &mut ClientProfileCreateRequest| {
                req.pcl_id = "13".to_string();
                req.key_id = 28;
                req.user_name = "AutoUser_CP".to_string();
                req.value = "true".to_string();
                req.id = 0;
            })
            .build(),
    )]
}

/// Unknown key and a blank user name.
pub fn create_negative() -> Vec<TestCase<ClientProfileCreateRequest>> {
    vec![TestCase::new(
        "CSClientProfile_Create_Negative_Data",
        Fixture::new()
            .seed(|req: &mut ClientProfileCreateRequest| {
                req.pcl_id = "13".to_string();
                req.key_id = 99990000;
                req.user_name = String::new();
                req.value = "true".to_string();
            })
            .exclude("userName")
            .build(),
    )]
}

pub fn update_positive() -> Vec<TestCase<ClientProfileUpdateRequest>> {
    vec![TestCase::new(
        "CSClientProfile_Update_Positive_Data",
        Fixture::new()
            .seed(|req: &mut ClientProfileUpdateRequest| {
                req.pcl_id = 13;
                req.key_id = 10;
                req.user_name = "AutCP".to_string();
                req.value = "true".to_string();
            })
            .build(),
    )]
}

/// Route of the master data lookup.
pub fn master_data_positive() -> Vec<TestCase<String>> {
    vec![TestCase::new(
        "CSClientProfile_GetMasterData_Positive",
        "clientprofiles/getmasterdata".to_string(),
    )]
}

/// A route suffix the API does not serve.
pub fn master_data_negative() -> Vec<TestCase<String>> {
    vec![TestCase::new(
        "CSClientProfile_GetMasterData_Negative_InvalidEndpoint",
        "clientprofiles/getmasterdata_invalid".to_string(),
    )]
}

pub fn delete_positive() -> Vec<TestCase<ClientProfileDeleteRequest>> {
    vec![TestCase::new(
        "CSClientProfile_Delete_Positive_Data",
        Fixture::new()
            .seed(|req: &mut ClientProfileDeleteRequest| {
                req.pcl_id = "13".to_string();
                req.key_id = 28;
                req.id = 1401772;
            })
            .build(),
    )]
}

pub fn delete_negative() -> Vec<TestCase<ClientProfileDeleteRequest>> {
    vec![TestCase::new(
        "CSClientProfile_Delete_Negative_Data",
        Fixture::new()
            .seed(|req: &mut ClientProfileDeleteRequest| {
                req.pcl_id = "13".to_string();
                req.key_id = 90000;
                req.id = 1;
            })
            .build(),
    )]
}
