//! Fixture builder: default-construct, seed, then auto-fill.
//!
//! A fixture is one ready-to-send request object. Test authors seed only the
//! fields a case cares about, including deliberately invalid ones, and let
//! the populator make every other field plausible. Invalid seeds that would
//! otherwise be "repaired" (a blank name, a zero day count) are protected by
//! excluding the field.
//!
//! ```rust
//! use api_fixtures::{Fixture, FillOptions, prepare};
//! use api_fixtures::models::UsersCreateRequest;
//!
//! let user = prepare(
//!     Some(|req: &mut UsersCreateRequest| req.status_id = 1216),
//!     None,
//! );
//! assert!(user.email.ends_with("@zensar.com"));
//!
//! let invalid = Fixture::<UsersCreateRequest>::new()
//!     .seed(|req| req.first_name = String::new())
//!     .exclude("firstName")
//!     .build();
//! assert_eq!(invalid.first_name, "");
//! ```

use crate::error::FixtureResult;
use crate::field::Populate;
use crate::options::FillOptions;
use crate::populator::{PopulateReport, Populator};
use crate::synth::RandomData;
use chrono::{DateTime, Utc};
use log::debug;
use rand::Rng;
use std::fmt;

/// Build one populated request object.
///
/// Constructs `T::default()`, applies `seed` when given, then populates the
/// instance with `options` (defaults when `None`).
pub fn prepare<T, F>(seed: Option<F>, options: Option<FillOptions>) -> T
where
    T: Default + Populate,
    F: FnOnce(&mut T),
{
    let options = options.unwrap_or_default();
    let mut value = T::default();
    if let Some(seed) = seed {
        seed(&mut value);
    }
    Populator::new(&options).populate(&mut value);
    value
}

/// Build one populated request object without a seed.
pub fn prepare_default<T: Default + Populate>() -> T {
    prepare(None::<fn(&mut T)>, None)
}

/// A populated fixture together with the population report.
#[derive(Debug, Clone)]
pub struct Prepared<T> {
    /// The request object
    pub value: T,
    /// What the populator did to it
    pub report: PopulateReport,
}

impl<T: Populate> Prepared<T> {
    /// Return the value if no branch was skipped.
    pub fn ensure_complete(self) -> FixtureResult<T> {
        self.report.ensure_complete(self.value.type_name())?;
        Ok(self.value)
    }

    /// Discard the report.
    pub fn into_inner(self) -> T {
        self.value
    }
}

type Seed<T> = Box<dyn FnOnce(&mut T) + Send>;

/// Fluent fixture builder.
///
/// Seeds run in the order they were added, before population. The builder is
/// `Send` so it can be assembled on one thread and built on another.
pub struct Fixture<T> {
    seeds: Vec<Seed<T>>,
    options: FillOptions,
    now: Option<DateTime<Utc>>,
}

impl<T> fmt::Debug for Fixture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixture")
            .field("type", &std::any::type_name::<T>())
            .field("seeds", &self.seeds.len())
            .field("options", &self.options)
            .field("now", &self.now)
            .finish()
    }
}

impl<T: Default + Populate> Default for Fixture<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + Populate> Fixture<T> {
    /// Builder with default options and no seed.
    pub fn new() -> Self {
        Self {
            seeds: Vec::new(),
            options: FillOptions::default(),
            now: None,
        }
    }

    /// Add a seed operation.
    pub fn seed<F>(mut self, seed: F) -> Self
    where
        F: FnOnce(&mut T) + Send + 'static,
    {
        self.seeds.push(Box::new(seed));
        self
    }

    /// Replace the fill options.
    pub fn options(mut self, options: FillOptions) -> Self {
        self.options = options;
        self
    }

    /// Exclude a field from population.
    pub fn exclude(mut self, name: impl AsRef<str>) -> Self {
        self.options.exclude_properties.insert(name);
        self
    }

    /// Set the email domain.
    pub fn email_domain(mut self, domain: impl Into<String>) -> Self {
        self.options.email_domain = domain.into();
        self
    }

    /// Anchor synthesized dates to a fixed instant.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Build the fixture.
    pub fn build(self) -> T {
        self.build_with_report().value
    }

    /// Build the fixture and keep the population report.
    pub fn build_with_report(self) -> Prepared<T> {
        self.build_with_rng(rand::rng())
    }

    /// Build the fixture drawing values from `rng`.
    pub fn build_with_rng<R: Rng>(self, rng: R) -> Prepared<T> {
        let mut data = RandomData::with_rng(rng);
        if let Some(now) = self.now {
            data = data.at(now);
        }

        let mut value = T::default();
        for seed in self.seeds {
            seed(&mut value);
        }
        let report = Populator::with_data(&self.options, data).populate(&mut value);
        debug!(
            "Prepared {} with {} excluded field(s)",
            value.type_name(),
            self.options.exclude_properties.len()
        );
        Prepared { value, report }
    }

    /// Validate the options, build, and fail if any branch was skipped.
    pub fn try_build(self) -> FixtureResult<T> {
        self.options.validate()?;
        self.build_with_report().ensure_complete()
    }
}
