//! Service level agreements: create, update, get and delete.

use super::TestCase;
use crate::fixture::Fixture;
use crate::models::{SlaCreateRequest, SlaUpdateRequest};
use chrono::{DateTime, TimeZone, Utc};

pub fn create_positive() -> Vec<TestCase<SlaCreateRequest>> {
    vec![TestCase::new(
        "Positive_Data_SLAcreation",
        Fixture::new()
            .seed(|req: &mut SlaCreateRequest| {
                req.id = 0;
                req.card_program_id = 1111;
                req.is_special_project = true;
                req.is_repeated_every_year = true;
                req.sladay = 0;
                req.special_project_minimum_shipment_card_count = 1;
                req.special_project_sladay = 33;
            })
            .build(),
    )]
}

/// Special project without special project days.
pub fn create_negative() -> Vec<TestCase<SlaCreateRequest>> {
    vec![TestCase::new(
        "Negative_Testdata_SLACreation",
        Fixture::new()
            .seed(|req: &mut SlaCreateRequest| {
                req.card_program_id = 1298;
                req.special_project_sladay = 0;
            })
            .exclude("specialProjectSladay")
            .build(),
    )]
}

pub fn update_positive() -> Vec<TestCase<SlaUpdateRequest>> {
    vec![TestCase::new(
        "Positive_Data_SLA_Update",
        Fixture::new()
            .seed(|req: &mut SlaUpdateRequest| {
                req.card_program_id = 1111;
                req.is_special_project = true;
                req.is_repeated_every_year = false;
                req.sladay = 10;
                req.special_project_minimum_shipment_card_count = 500;
                req.special_project_sladay = 15;
            })
            .build(),
    )]
}

fn utc_midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Zero SLA days and an end date before the effective date.
pub fn update_negative() -> Vec<TestCase<SlaUpdateRequest>> {
    vec![TestCase::new(
        "Negative_Data_SLA_Update_InvalidSladayAndDates",
        Fixture::new()
            .seed(|req: &mut SlaUpdateRequest| {
                req.id = 1001;
                req.card_program_id = 1;
                req.sladay = 0;
                req.special_project_minimum_shipment_card_count = 500;
                req.special_project_sladay = 15;
                req.effective_date = utc_midnight(2025, 12, 31);
                req.end_date = utc_midnight(2025, 1, 1);
            })
            .exclude("sladay")
            .exclude("effectiveDate")
            .exclude("endDate")
            .build(),
    )]
}

pub fn get_positive() -> Vec<TestCase<i64>> {
    vec![TestCase::new("Positive_Data_SLA_Get_ById_101", 101)]
}

pub fn get_negative() -> Vec<TestCase<i64>> {
    vec![TestCase::new("Negative_Data_SLA_Get_ById_Invalid", 10101010)]
}

pub fn delete_positive() -> Vec<TestCase<i64>> {
    vec![TestCase::new("Positive_Data_SLA_Delete_ById_2002", 2002)]
}

pub fn delete_negative() -> Vec<TestCase<i64>> {
    vec![TestCase::new("Negative_Data_SLA_Delete_ById_Invalid", 999999)]
}
