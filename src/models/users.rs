use crate::impl_populate;
use serde::{Deserialize, Serialize};

/// `POST users`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersCreateRequest {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub pcl_ids: Option<Vec<i64>>,
    pub role_ids: Option<Vec<i64>>,
    #[serde(rename = "StatusId")]
    pub status_id: i64,
}

impl_populate!(UsersCreateRequest {
    "firstName" => first_name,
    "middleName" => middle_name,
    "lastName" => last_name,
    "userName" => user_name,
    "email" => email,
    "pclIds" => pcl_ids,
    "roleIds" => role_ids,
    "StatusId" => status_id,
});

/// `PUT users/updateuser`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersUpdateRequest {
    pub user_id: i64,
    pub pcl_id_delete: Option<Vec<i64>>,
    pub pcl_id_insert: Option<Vec<i64>>,
    pub role_id_delete: Option<Vec<i64>>,
    pub role_id_insert: Option<Vec<i64>>,
    pub status_code_id: i64,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
}

impl_populate!(UsersUpdateRequest {
    "userId" => user_id,
    "pclIdDelete" => pcl_id_delete,
    "pclIdInsert" => pcl_id_insert,
    "roleIdDelete" => role_id_delete,
    "roleIdInsert" => role_id_insert,
    "statusCodeId" => status_code_id,
    "firstName" => first_name,
    "middleName" => middle_name,
    "lastName" => last_name,
});
