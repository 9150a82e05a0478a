//! Integration tests for the auto-fill engine.
//!
//! Every test goes through the public API only: the fixture builder, the
//! populator, fill options and the built-in providers.

pub mod concurrency;
pub mod exclusion;
pub mod native_dates;
pub mod nested;
pub mod properties;
pub mod providers;
