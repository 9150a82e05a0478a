use crate::impl_populate;
use serde::{Deserialize, Serialize};

/// `POST cardprofiles`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmvCardProfileCreateRequest {
    pub user_name: String,
    pub name: String,
    pub issuer_id: i64,
    /// `yyyy-MM-dd`
    pub expiration_date: String,
    pub description: String,
}

impl_populate!(EmvCardProfileCreateRequest {
    "userName" => user_name,
    "name" => name,
    "issuerId" => issuer_id,
    "expirationDate" => expiration_date,
    "description" => description,
});

/// `PUT cardprofiles`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmvCardProfileUpdateRequest {
    pub user_name: String,
    pub name: String,
    pub issuer_id: i64,
    /// `yyyy-MM-dd`
    pub expiration_date: String,
    pub description: String,
    #[serde(rename = "cardprofileid")]
    pub card_profile_id: i64,
}

impl_populate!(EmvCardProfileUpdateRequest {
    "userName" => user_name,
    "name" => name,
    "issuerId" => issuer_id,
    "expirationDate" => expiration_date,
    "description" => description,
    "cardprofileid" => card_profile_id,
});
