//! Named positive and negative test cases per endpoint.
//!
//! Every provider returns the cases for one scenario; payload cases are
//! built with the [`Fixture`](crate::fixture::Fixture) builder so only the
//! fields a case is about are pinned and everything else is auto-filled.
//! Lookup cases (GET/DELETE by id) carry the id as their payload.
//!
//! ```rust
//! use api_fixtures::providers::users;
//!
//! let case = &users::create_negative()[0];
//! assert_eq!(case.name, "Users_Create_Negative_Data");
//! assert_eq!(case.payload.email, "abcd@zensar.com");
//! ```

pub mod categories;
pub mod client_profiles;
pub mod emv;
pub mod hot_stamps;
pub mod programs;
pub mod sla;
pub mod users;

use crate::error::FixtureResult;
use serde::Serialize;
use serde_json::Value;

/// A named test case and its payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCase<T> {
    /// Name reported by the test runner
    pub name: String,
    /// Request object or lookup id
    pub payload: T,
}

impl<T> TestCase<T> {
    /// Create a test case.
    pub fn new(name: impl Into<String>, payload: T) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

impl<T: Serialize> TestCase<T> {
    /// Convert the payload to JSON.
    pub fn to_json(&self) -> FixtureResult<TestCase<Value>> {
        Ok(TestCase::new(self.name.clone(), serde_json::to_value(&self.payload)?))
    }

    /// Render as a pretty-printed `{ "name": ..., "payload": ... }` object.
    pub fn to_pretty_json(&self) -> FixtureResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn to_json<T: Serialize>(cases: Vec<TestCase<T>>) -> FixtureResult<Vec<TestCase<Value>>> {
    cases.iter().map(TestCase::to_json).collect()
}

/// Every test case of every provider, with JSON payloads.
pub fn catalogue() -> FixtureResult<Vec<TestCase<Value>>> {
    let groups = [
        to_json(users::create_positive())?,
        to_json(users::create_negative())?,
        to_json(users::update_positive())?,
        to_json(users::update_negative())?,
        to_json(users::get_by_pcl_valid())?,
        to_json(users::get_by_pcl_invalid())?,
        to_json(emv::create_positive())?,
        to_json(emv::create_negative())?,
        to_json(emv::update_positive())?,
        to_json(emv::update_negative())?,
        to_json(sla::create_positive())?,
        to_json(sla::create_negative())?,
        to_json(sla::update_positive())?,
        to_json(sla::update_negative())?,
        to_json(sla::get_positive())?,
        to_json(sla::get_negative())?,
        to_json(sla::delete_positive())?,
        to_json(sla::delete_negative())?,
        to_json(hot_stamps::create_positive())?,
        to_json(hot_stamps::create_negative())?,
        to_json(hot_stamps::update_positive())?,
        to_json(hot_stamps::update_negative())?,
        to_json(hot_stamps::get_positive())?,
        to_json(hot_stamps::get_negative())?,
        to_json(client_profiles::create_positive())?,
        to_json(client_profiles::create_negative())?,
        to_json(client_profiles::update_positive())?,
        to_json(client_profiles::master_data_positive())?,
        to_json(client_profiles::master_data_negative())?,
        to_json(client_profiles::delete_positive())?,
        to_json(client_profiles::delete_negative())?,
        to_json(categories::create_positive())?,
        to_json(categories::create_negative())?,
        to_json(categories::rename())?,
        to_json(categories::toggle())?,
        to_json(categories::move_up_down())?,
        to_json(categories::make_default())?,
        to_json(categories::delete_positive())?,
        to_json(programs::get_positive())?,
        to_json(programs::dropdowns())?,
    ];
    Ok(groups.into_iter().flatten().collect())
}

/// Test cases whose name contains `filter`, ignoring case.
pub fn find(filter: &str) -> FixtureResult<Vec<TestCase<Value>>> {
    let filter = filter.to_lowercase();
    Ok(catalogue()?
        .into_iter()
        .filter(|case| case.name.to_lowercase().contains(&filter))
        .collect())
}
