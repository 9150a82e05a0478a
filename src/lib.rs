//! Test-data auto-fill for REST API test suites.
//!
//! Builds ready-to-send request objects: a test author seeds the fields a
//! case is about, and every other text or date field is filled with a
//! plausible value chosen from the field's name.
//!
//! # Core Components
//!
//! - [`RandomData`] - Random letters, digits, emails and formatted dates
//! - [`classify`] - Name-based choice of a fill rule for each field
//! - [`Populator`] - Recursive fill of a request object and its children
//! - [`Fixture`] / [`prepare`] - Default-construct, seed, then populate
//!
//! # Quick Start
//!
//! ```rust
//! use api_fixtures::{Fixture, FillOptions, Populator, impl_populate};
//!
//! #[derive(Debug, Default)]
//! struct SignupRequest {
//!     first_name: String,
//!     email: String,
//!     phone_number: String,
//!     status_id: i64,
//! }
//!
//! impl_populate!(SignupRequest {
//!     "firstName" => first_name,
//!     "email" => email,
//!     "phoneNumber" => phone_number,
//!     "statusId" => status_id,
//! });
//!
//! let request = Fixture::<SignupRequest>::new()
//!     .seed(|req| req.status_id = 5)
//!     .email_domain("example.org")
//!     .build();
//! assert!(request.first_name.starts_with("Auto_"));
//! assert!(request.email.ends_with("@example.org"));
//! assert_eq!(request.phone_number.len(), 10);
//! assert_eq!(request.status_id, 5);
//!
//! // Populating an existing object
//! let mut existing = SignupRequest::default();
//! let options = FillOptions::new().exclude("email");
//! let report = Populator::new(&options).populate(&mut existing);
//! assert_eq!(existing.email, "");
//! assert!(report.was_filled("firstName"));
//! ```

pub mod classify;
pub mod error;
pub mod field;
pub mod fixture;
pub mod models;
pub mod options;
pub mod populator;
pub mod providers;
pub mod synth;

// Re-export commonly used types for convenience
pub use error::{FixtureError, FixtureResult};
pub use field::{AsFieldValue, Field, FieldValue, Populate};
pub use fixture::{Fixture, Prepared, prepare, prepare_default};
pub use options::{ExclusionSet, FillOptions};
pub use populator::{PopulateReport, Populator, populate};
pub use synth::RandomData;
