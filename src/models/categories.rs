use crate::impl_populate;
use serde::{Deserialize, Serialize};

/// `POST categories`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryCreateRequest {
    pub name: String,
    pub parent_category_id: i64,
    pub pcl_id: i64,
}

impl_populate!(CategoryCreateRequest {
    "Name" => name,
    "ParentCategoryId" => parent_category_id,
    "PclId" => pcl_id,
});

/// `PUT categories/rename`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRenameRequest {
    pub name: String,
    pub category_id: i64,
    pub pcl_id: i64,
}

impl_populate!(CategoryRenameRequest {
    "name" => name,
    "categoryId" => category_id,
    "pclId" => pcl_id,
});

/// `PUT categories/turnonoff`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryToggleRequest {
    #[serde(rename = "pclid")]
    pub pcl_id: i64,
    pub category_id: i64,
    pub active: bool,
}

impl_populate!(CategoryToggleRequest {
    "pclid" => pcl_id,
    "categoryId" => category_id,
    "active" => active,
});

/// `PUT categories/moveupdown`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMoveRequest {
    #[serde(rename = "pclid")]
    pub pcl_id: i64,
    pub is_up: bool,
    pub category_id: i64,
    pub parent_category_id: i64,
}

impl_populate!(CategoryMoveRequest {
    "pclid" => pcl_id,
    "isUp" => is_up,
    "categoryId" => category_id,
    "parentCategoryId" => parent_category_id,
});

/// `PUT categories/makedefault`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryMakeDefaultRequest {
    pub pcl_id: i64,
    pub category_id: i64,
    pub category_type_id: i64,
}

impl_populate!(CategoryMakeDefaultRequest {
    "PclId" => pcl_id,
    "CategoryId" => category_id,
    "CategoryTypeId" => category_type_id,
});
