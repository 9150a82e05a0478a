//! Recursive object graph population.
//!
//! The [`Populator`] walks a request object through its [`Populate`]
//! descriptors and writes synthesized values into blank text and unset date
//! fields. Scalars are never synthesized. Absent nested records and
//! collections are built with their default constructor and then walked;
//! absent records without one are left empty and reported as skipped.
//!
//! Elements of sequences and values of maps are walked when they are
//! records or collections. Text, date and scalar elements carry no field
//! name to classify and are left untouched.

use crate::classify::{
    FUTURE_DATE_DAYS, FillRule, PAST_DATE_DAYS, PHONE_DIGITS, classify_date, classify_text,
};
use crate::error::{FixtureError, FixtureResult};
use crate::field::{Absent, FieldValue, Populate};
use crate::options::FillOptions;
use crate::synth::RandomData;
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, trace};
use rand::Rng;
use rand::rngs::ThreadRng;
use serde::Serialize;
use std::fmt;

/// Why a branch of the object graph was left unpopulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum SkipReason {
    /// The absent type cannot be constructed without arguments
    NoDefaultConstructor,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoDefaultConstructor => f.write_str("type has no default constructor"),
        }
    }
}

/// A branch the populator could not build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skipped {
    /// Path of the field, e.g. `profile.card`
    pub path: String,
    /// Name of the type that could not be constructed
    pub type_name: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Outcome of one population run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulateReport {
    /// Paths of fields that received a synthesized value
    pub filled: Vec<String>,
    /// Paths of absent records and collections that were default-constructed
    pub constructed: Vec<String>,
    /// Paths of fields skipped because of the exclusion set
    pub excluded: Vec<String>,
    /// Branches left unpopulated
    pub skipped: Vec<Skipped>,
}

impl PopulateReport {
    /// Whether every reachable branch was populated.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Whether the field at `path` received a synthesized value.
    pub fn was_filled(&self, path: &str) -> bool {
        self.filled.iter().any(|filled| filled == path)
    }

    /// Fail with the first skipped branch, attributed to `type_name`.
    pub fn ensure_complete(&self, type_name: &str) -> FixtureResult<()> {
        match self.skipped.first() {
            None => Ok(()),
            Some(skipped) => Err(FixtureError::unresolved(
                type_name,
                skipped.path.clone(),
                format!("{} ({})", skipped.reason, skipped.type_name),
            )),
        }
    }
}

/// Populates request objects in place according to [`FillOptions`].
///
/// # Examples
///
/// ```rust
/// use api_fixtures::{FillOptions, Populator, impl_populate};
///
/// #[derive(Debug, Default)]
/// struct Signup {
///     first_name: String,
///     email: String,
///     status_id: i32,
/// }
///
/// impl_populate!(Signup {
///     "firstName" => first_name,
///     "email" => email,
///     "statusId" => status_id,
/// });
///
/// let options = FillOptions::default();
/// let mut signup = Signup { status_id: 1216, ..Default::default() };
/// let report = Populator::new(&options).populate(&mut signup);
///
/// assert!(signup.first_name.starts_with("Auto_"));
/// assert!(signup.email.ends_with("@zensar.com"));
/// assert_eq!(signup.status_id, 1216);
/// assert!(report.was_filled("email"));
/// ```
pub struct Populator<'o, R = ThreadRng> {
    options: &'o FillOptions,
    data: RandomData<R>,
    report: PopulateReport,
}

impl<'o> Populator<'o, ThreadRng> {
    /// Populator drawing from the thread-local CSPRNG.
    pub fn new(options: &'o FillOptions) -> Self {
        Self::with_data(options, RandomData::new())
    }
}

impl<'o, R: Rng> Populator<'o, R> {
    /// Populator drawing from the given value source.
    pub fn with_data(options: &'o FillOptions, data: RandomData<R>) -> Self {
        Self {
            options,
            data,
            report: PopulateReport::default(),
        }
    }

    /// Populate `target` in place and return what was done.
    pub fn populate(&mut self, target: &mut dyn Populate) -> PopulateReport {
        let type_name = target.type_name();
        self.walk_record(target, "");
        let report = std::mem::take(&mut self.report);
        debug!(
            "Populated {}: {} filled, {} constructed, {} excluded, {} skipped",
            type_name,
            report.filled.len(),
            report.constructed.len(),
            report.excluded.len(),
            report.skipped.len()
        );
        report
    }

    /// Populate `target` when present; `None` is a no-op.
    pub fn populate_optional(&mut self, target: Option<&mut dyn Populate>) -> PopulateReport {
        match target {
            Some(target) => self.populate(target),
            None => PopulateReport::default(),
        }
    }

    fn walk_record(&mut self, record: &mut dyn Populate, path: &str) {
        for field in record.fields() {
            let field_path = join_path(path, field.name);
            if self.options.is_excluded(field.name) {
                trace!("Excluded {}", field_path);
                self.report.excluded.push(field_path);
                continue;
            }
            self.fill_field(field.name, field.value, field_path);
        }
    }

    fn fill_field(&mut self, name: &str, value: FieldValue<'_>, path: String) {
        match value {
            FieldValue::Text(text) => {
                if self.should_fill_text(Some(text.as_str())) {
                    *text = self.synthesize_text(name);
                    self.mark_filled(path, text);
                }
            }
            FieldValue::OptionalText(text) => {
                if self.should_fill_text(text.as_deref()) {
                    let value = text.insert(self.synthesize_text(name));
                    self.mark_filled(path, value);
                }
            }
            FieldValue::DateTime(instant) => {
                if self.should_fill_date(Some(*instant), DateTime::<Utc>::default()) {
                    *instant = self.synthesize_instant(name);
                    self.mark_filled(path, instant);
                }
            }
            FieldValue::OptionalDateTime(instant) => {
                if self.should_fill_date(*instant, DateTime::<Utc>::default()) {
                    let value = instant.insert(self.synthesize_instant(name));
                    self.mark_filled(path, value);
                }
            }
            FieldValue::Date(date) => {
                if self.should_fill_date(Some(*date), NaiveDate::default()) {
                    *date = self.synthesize_instant(name).date_naive();
                    self.mark_filled(path, date);
                }
            }
            FieldValue::OptionalDate(date) => {
                if self.should_fill_date(*date, NaiveDate::default()) {
                    let value = date.insert(self.synthesize_instant(name).date_naive());
                    self.mark_filled(path, value);
                }
            }
            FieldValue::Scalar => {}
            other => self.walk_nested(other, path, true),
        }
    }

    /// Walk records and collections. Absent slots are only constructed when
    /// they are named fields, not sequence elements or map values.
    fn walk_nested(&mut self, value: FieldValue<'_>, path: String, construct_absent: bool) {
        match value {
            FieldValue::Record(record) => self.walk_record(record, &path),
            FieldValue::Sequence(items) => {
                for (index, item) in items.into_iter().enumerate() {
                    self.walk_nested(item, format!("{}[{}]", path, index), false);
                }
            }
            FieldValue::Map(entries) => {
                for (key, entry) in entries {
                    self.walk_nested(entry, format!("{}[{}]", path, key), false);
                }
            }
            FieldValue::Absent(absent) if construct_absent => self.construct(absent, path),
            _ => {}
        }
    }

    fn construct(&mut self, absent: Absent<'_>, path: String) {
        let type_name = absent.type_name();
        match absent.construct() {
            Some(value) => {
                trace!("Constructed default {} at {}", type_name, path);
                self.report.constructed.push(path.clone());
                self.walk_nested(value, path, false);
            }
            None => {
                debug!("Skipped {} at {}: no default constructor", type_name, path);
                self.report.skipped.push(Skipped {
                    path,
                    type_name: type_name.to_string(),
                    reason: SkipReason::NoDefaultConstructor,
                });
            }
        }
    }

    fn should_fill_text(&self, current: Option<&str>) -> bool {
        let blank = current.is_none_or(|text| text.trim().is_empty());
        blank || !self.options.only_fill_when_empty
    }

    fn should_fill_date<T: PartialEq>(&self, current: Option<T>, zero: T) -> bool {
        let unset = current.is_none_or(|value| value == zero);
        unset || !self.options.only_fill_when_empty
    }

    fn synthesize_text(&mut self, name: &str) -> String {
        match classify_text(name) {
            FillRule::Email => self.data.email(&self.options.email_domain),
            FillRule::PhoneDigits => self.data.digits(PHONE_DIGITS),
            FillRule::FutureDate => self.data.future_date(FUTURE_DATE_DAYS.0, FUTURE_DATE_DAYS.1),
            FillRule::PastDate => self.data.past_date(PAST_DATE_DAYS.0, PAST_DATE_DAYS.1),
            _ => self.data.auto_tag(self.options.auto_letters),
        }
    }

    fn synthesize_instant(&self, name: &str) -> DateTime<Utc> {
        self.data.shifted(classify_date(name).offset_days())
    }

    fn mark_filled(&mut self, path: String, value: &dyn fmt::Debug) {
        trace!("Filled {} = {:?}", path, value);
        self.report.filled.push(path);
    }
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

/// Populate `target` in place with a fresh thread-local value source.
pub fn populate(target: &mut dyn Populate, options: &FillOptions) -> PopulateReport {
    Populator::new(options).populate(target)
}
