//! # Fixture Preview
//!
//! Prints the auto-filled payloads of the built-in test cases as JSON, so a
//! test author can see what the API will receive before running a suite.
//!
//! ## Usage
//!
//! ```bash
//! # Every test case
//! cargo run --bin fixture-preview
//!
//! # Test cases whose name contains the filter, ignoring case
//! cargo run --bin fixture-preview sla_update
//! ```
//!
//! ## Output Example
//!
//! ```text
//! {
//!   "name": "Positive_Data_SLA_Get_ById_101",
//!   "payload": 101
//! }
//!
//! {
//!   "name": "Negative_Data_SLA_Get_ById_Invalid",
//!   "payload": 10101010
//! }
//!
//! 2 test case(s) matched 'sla_get'
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: At least one test case was printed
//! - `1`: No test case matched, or a payload could not be serialized

use api_fixtures::providers::{self, TestCase};
use serde_json::Value;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [name-filter]", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {}", args[0]);
        eprintln!("  {} users_create", args[0]);
        process::exit(1);
    }

    let filter = args.get(1).map(String::as_str).unwrap_or("");

    let cases = match providers::find(filter) {
        Ok(cases) => cases,
        Err(e) => {
            eprintln!("❌ Failed to build test cases: {}", e);
            process::exit(1);
        }
    };

    if cases.is_empty() {
        eprintln!("No test case matches '{}'", filter);
        process::exit(1);
    }

    for case in &cases {
        print_case(case);
    }

    if filter.is_empty() {
        println!("{} test case(s)", cases.len());
    } else {
        println!("{} test case(s) matched '{}'", cases.len(), filter);
    }
}

fn print_case(case: &TestCase<Value>) {
    match case.to_pretty_json() {
        Ok(json) => println!("{}\n", json),
        Err(e) => {
            eprintln!("❌ Failed to render {}: {}", case.name, e);
            process::exit(1);
        }
    }
}
