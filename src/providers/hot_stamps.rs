//! Client settings hot stamps: create, update and get.

use super::TestCase;
use crate::fixture::Fixture;
use crate::models::{HotStampCreateRequest, HotStampUpdateRequest};

pub fn create_positive() -> Vec<TestCase<HotStampCreateRequest>> {
    vec![TestCase::new(
        "Positive_Data_CSHotStamp_Create",
        Fixture::new()
            .seed(|req: &mut HotStampCreateRequest| {
                req.pcl_id = 13;
                req.name = Some("Gold Stamp".to_string());
                req.description = "High quality".to_string();
                req.user_name = "Samantha".to_string();
            })
            .build(),
    )]
}

/// Name left out of the payload.
pub fn create_negative() -> Vec<TestCase<HotStampCreateRequest>> {
    vec![TestCase::new(
        "Negative_Data_CSHotStamp_Create_NameMissing",
        Fixture::new()
            .seed(|req: &mut HotStampCreateRequest| {
                req.pcl_id = 13;
                req.name = None;
                req.description = "Invalid test case".to_string();
                req.user_name = "UN".to_string();
            })
            .exclude("name")
            .build(),
    )]
}

pub fn update_positive() -> Vec<TestCase<HotStampUpdateRequest>> {
    vec![TestCase::new(
        "Positive_Data_CSHotStamp_Update",
        Fixture::new()
            .seed(|req: &mut HotStampUpdateRequest| {
                req.pcl_id = "13".to_string();
                req.id = 101;
                req.name = "Silver Stamp".to_string();
                req.description = "Updated hot stamp description".to_string();
                req.user_name = "USNAme".to_string();
            })
            .build(),
    )]
}

pub fn update_negative() -> Vec<TestCase<HotStampUpdateRequest>> {
    vec![TestCase::new(
        "Negative_Data_CSHotStamp_Update_InvalidName",
        Fixture::new()
            .seed(|req: &mut HotStampUpdateRequest| {
                req.pcl_id = "13".to_string();
                req.id = 13;
                req.name = String::new();
                req.description = "Invalid update attempt".to_string();
                req.user_name = "kishor".to_string();
            })
            .exclude("name")
            .build(),
    )]
}

pub fn get_positive() -> Vec<TestCase<i64>> {
    vec![TestCase::new("Positive_Data_CSHotStamp_Get_ById_101", 101)]
}

pub fn get_negative() -> Vec<TestCase<i64>> {
    vec![TestCase::new("Negative_Data_CSHotStamp_Get_ById_Invalid", 9999999)]
}
