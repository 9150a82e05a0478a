use crate::impl_populate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `POST slaconfigurationparameters`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaCreateRequest {
    pub id: i64,
    pub card_program_id: i64,
    pub is_special_project: bool,
    pub is_repeated_every_year: bool,
    pub sladay: i64,
    pub special_project_minimum_shipment_card_count: i64,
    pub special_project_sladay: i64,
    pub effective_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl_populate!(SlaCreateRequest {
    "id" => id,
    "cardProgramId" => card_program_id,
    "isSpecialProject" => is_special_project,
    "isRepeatedEveryYear" => is_repeated_every_year,
    "sladay" => sladay,
    "specialProjectMinimumShipmentCardCount" => special_project_minimum_shipment_card_count,
    "specialProjectSladay" => special_project_sladay,
    "effectiveDate" => effective_date,
    "endDate" => end_date,
});

/// `PUT slaconfigurationparameters`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaUpdateRequest {
    pub id: i64,
    pub card_program_id: i64,
    pub is_special_project: bool,
    pub is_repeated_every_year: bool,
    pub sladay: i64,
    pub special_project_minimum_shipment_card_count: i64,
    pub special_project_sladay: i64,
    pub effective_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl_populate!(SlaUpdateRequest {
    "id" => id,
    "cardProgramId" => card_program_id,
    "isSpecialProject" => is_special_project,
    "isRepeatedEveryYear" => is_repeated_every_year,
    "sladay" => sladay,
    "specialProjectMinimumShipmentCardCount" => special_project_minimum_shipment_card_count,
    "specialProjectSladay" => special_project_sladay,
    "effectiveDate" => effective_date,
    "endDate" => end_date,
});
