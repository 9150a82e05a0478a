use crate::impl_populate;
use serde::{Deserialize, Serialize};

/// `POST hotstamps`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotStampCreateRequest {
    pub pcl_id: i64,
    /// Serialized as `null` when absent
    pub name: Option<String>,
    pub description: String,
    pub user_name: String,
}

impl_populate!(HotStampCreateRequest {
    "pclId" => pcl_id,
    "name" => name,
    "description" => description,
    "userName" => user_name,
});

/// `PUT hotstamps`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotStampUpdateRequest {
    pub name: String,
    pub description: String,
    pub user_name: String,
    pub id: i64,
    /// Sent as text by this endpoint
    pub pcl_id: String,
}

impl_populate!(HotStampUpdateRequest {
    "name" => name,
    "description" => description,
    "userName" => user_name,
    "id" => id,
    "pclId" => pcl_id,
});

/// `POST clientprofiles`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfileCreateRequest {
    pub pcl_id: String,
    pub key_id: i64,
    pub user_name: String,
    pub value: String,
    pub id: i64,
}

impl_populate!(ClientProfileCreateRequest {
    "pclId" => pcl_id,
    "keyId" => key_id,
    "userName" => user_name,
    "value" => value,
    "id" => id,
});

/// `PUT clientprofiles`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfileUpdateRequest {
    pub pcl_id: i64,
    pub key_id: i64,
    pub user_name: String,
    pub value: String,
}

impl_populate!(ClientProfileUpdateRequest {
    "pclId" => pcl_id,
    "keyId" => key_id,
    "userName" => user_name,
    "value" => value,
});

/// `DELETE clientprofiles`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfileDeleteRequest {
    pub pcl_id: String,
    pub key_id: i64,
    pub id: i64,
}

impl_populate!(ClientProfileDeleteRequest {
    "pclId" => pcl_id,
    "keyId" => key_id,
    "id" => id,
});
