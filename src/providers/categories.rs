//! Categories: create, rename, toggle, move, make default and delete.

use super::TestCase;
use crate::fixture::Fixture;
use crate::models::{
    CategoryCreateRequest, CategoryMakeDefaultRequest, CategoryMoveRequest, CategoryRenameRequest,
    CategoryToggleRequest,
};

pub fn create_positive() -> Vec<TestCase<CategoryCreateRequest>> {
    vec![TestCase::new(
        "CreateCategory_Valid_Parent1",
        Fixture::new()
            .seed(|req: &mut CategoryCreateRequest| {
                req.name = "Automated_Category".to_string();
                req.parent_category_id = 266;
                req.pcl_id = 118;
            })
            .build(),
    )]
}

pub fn create_negative() -> Vec<TestCase<CategoryCreateRequest>> {
    vec![TestCase::new(
        "CreateCategory_Invalid_EmptyName",
        Fixture::new()
            .seed(|req: &mut CategoryCreateRequest| {
                req.name = String::new();
                req.parent_category_id = 1;
                req.pcl_id = 100;
            })
            .exclude("Name")
            .build(),
    )]
}

pub fn rename() -> Vec<TestCase<CategoryRenameRequest>> {
    vec![TestCase::new(
        "PutCategory_Rename_Valid",
        Fixture::new()
            .seed(|req: &mut CategoryRenameRequest| {
                req.name = "Automated_Category".to_string();
                req.category_id = 447;
                req.pcl_id = 127;
            })
            .build(),
    )]
}

pub fn toggle() -> Vec<TestCase<CategoryToggleRequest>> {
    vec![TestCase::new(
        "PutCategory_TurnOffON_Valid",
        Fixture::new()
            .seed(|req: &mut CategoryToggleRequest| {
                req.pcl_id = 13;
                req.category_id = 447;
                req.active = true;
            })
            .build(),
    )]
}

pub fn move_up_down() -> Vec<TestCase<CategoryMoveRequest>> {
    vec![TestCase::new(
        "PutCategory_MoveupDown_Valid",
        Fixture::new()
            .seed(|req: &mut CategoryMoveRequest| {
                req.pcl_id = 127;
                req.is_up = true;
                req.category_id = 446;
                req.parent_category_id = 442;
            })
            .build(),
    )]
}

pub fn make_default() -> Vec<TestCase<CategoryMakeDefaultRequest>> {
    vec![TestCase::new(
        "PutCategory_Makedefault_Valid",
        Fixture::new()
            .seed(|req: &mut CategoryMakeDefaultRequest| {
                req.pcl_id = 118;
                req.category_id = 475;
                req.category_type_id = 266;
            })
            .build(),
    )]
}

pub fn delete_positive() -> Vec<TestCase<i64>> {
    vec![TestCase::new("DeleteCategory_Positive", 1)]
}
