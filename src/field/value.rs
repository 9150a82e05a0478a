//! The closed set of field value views and their conversions.

use super::Populate;
use crate::classify::FieldKind;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Mutable view of a single field value.
pub enum FieldValue<'a> {
    /// Required text
    Text(&'a mut String),
    /// Optional text; `None` counts as blank
    OptionalText(&'a mut Option<String>),
    /// UTC date/time; the Unix epoch counts as unset
    DateTime(&'a mut DateTime<Utc>),
    /// Optional UTC date/time
    OptionalDateTime(&'a mut Option<DateTime<Utc>>),
    /// Calendar date; `1970-01-01` counts as unset
    Date(&'a mut NaiveDate),
    /// Optional calendar date
    OptionalDate(&'a mut Option<NaiveDate>),
    /// Numeric, boolean, enumeration or identifier. Never synthesized.
    Scalar,
    /// Nested record that is present
    Record(&'a mut dyn Populate),
    /// Elements of an ordered sequence, in order
    Sequence(Vec<FieldValue<'a>>),
    /// Values of a keyed map with their keys
    Map(Vec<(String, FieldValue<'a>)>),
    /// Nested record or collection that is currently `None`
    Absent(Absent<'a>),
}

impl<'a> FieldValue<'a> {
    /// Declared kind of the value.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) | FieldValue::OptionalText(_) => FieldKind::Text,
            FieldValue::DateTime(_)
            | FieldValue::OptionalDateTime(_)
            | FieldValue::Date(_)
            | FieldValue::OptionalDate(_) => FieldKind::Date,
            FieldValue::Scalar => FieldKind::Scalar,
            FieldValue::Record(_) => FieldKind::Record,
            FieldValue::Sequence(_) => FieldKind::Sequence,
            FieldValue::Map(_) => FieldKind::Map,
            FieldValue::Absent(absent) => absent.kind(),
        }
    }

    /// View of an optional record whose type has no `Default`.
    ///
    /// When the slot is `None` the populator cannot build a value; it leaves
    /// the slot empty and reports the branch as skipped.
    pub fn optional_record<T: Populate + 'a>(slot: &'a mut Option<T>) -> Self {
        match slot {
            Some(record) => FieldValue::Record(record),
            None => FieldValue::Absent(Absent::unconstructible(
                std::any::type_name::<T>(),
                FieldKind::Record,
            )),
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) => f.debug_tuple("Text").field(value).finish(),
            FieldValue::OptionalText(value) => f.debug_tuple("OptionalText").field(value).finish(),
            FieldValue::DateTime(value) => f.debug_tuple("DateTime").field(value).finish(),
            FieldValue::OptionalDateTime(value) => {
                f.debug_tuple("OptionalDateTime").field(value).finish()
            }
            FieldValue::Date(value) => f.debug_tuple("Date").field(value).finish(),
            FieldValue::OptionalDate(value) => f.debug_tuple("OptionalDate").field(value).finish(),
            FieldValue::Scalar => f.write_str("Scalar"),
            FieldValue::Record(record) => {
                f.debug_tuple("Record").field(&record.type_name()).finish()
            }
            FieldValue::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            FieldValue::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            FieldValue::Absent(absent) => fmt::Debug::fmt(absent, f),
        }
    }
}

type Constructor<'a> = Box<dyn FnOnce() -> FieldValue<'a> + 'a>;

/// A `None` record or collection slot, with the means to fill it if any.
pub struct Absent<'a> {
    type_name: &'static str,
    kind: FieldKind,
    constructor: Option<Constructor<'a>>,
}

impl<'a> Absent<'a> {
    /// Slot that can be filled by `constructor`.
    pub fn constructible<F>(type_name: &'static str, kind: FieldKind, constructor: F) -> Self
    where
        F: FnOnce() -> FieldValue<'a> + 'a,
    {
        Self {
            type_name,
            kind,
            constructor: Some(Box::new(constructor)),
        }
    }

    /// Slot whose type cannot be built without arguments.
    pub fn unconstructible(type_name: &'static str, kind: FieldKind) -> Self {
        Self {
            type_name,
            kind,
            constructor: None,
        }
    }

    /// Slot that fills itself with `T::default()`.
    pub fn with_default<T>(slot: &'a mut Option<T>, kind: FieldKind) -> Self
    where
        T: AsFieldValue + Default + 'a,
    {
        Self::constructible(std::any::type_name::<T>(), kind, move || {
            let slot = slot;
            slot.insert(T::default()).as_field_value()
        })
    }

    /// Name of the missing type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Kind of the missing value.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether the slot can be filled.
    pub fn is_constructible(&self) -> bool {
        self.constructor.is_some()
    }

    /// Fill the slot and return a view of the new value.
    ///
    /// Returns `None`, leaving the slot empty, when the type has no
    /// constructor.
    pub fn construct(self) -> Option<FieldValue<'a>> {
        self.constructor.map(|constructor| constructor())
    }
}

impl fmt::Debug for Absent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Absent")
            .field("type_name", &self.type_name)
            .field("kind", &self.kind)
            .field("constructible", &self.is_constructible())
            .finish()
    }
}

/// Conversion into a mutable [`FieldValue`] view.
pub trait AsFieldValue {
    /// Borrow `self` as a field value.
    fn as_field_value(&mut self) -> FieldValue<'_>;
}

impl<T: Populate> AsFieldValue for T {
    fn as_field_value(&mut self) -> FieldValue<'_> {
        FieldValue::Record(self)
    }
}

impl<T: Populate + Default> AsFieldValue for Option<T> {
    fn as_field_value(&mut self) -> FieldValue<'_> {
        match self {
            Some(record) => FieldValue::Record(record),
            None => FieldValue::Absent(Absent::with_default(self, FieldKind::Record)),
        }
    }
}

impl AsFieldValue for String {
    fn as_field_value(&mut self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for Option<String> {
    fn as_field_value(&mut self) -> FieldValue<'_> {
        FieldValue::OptionalText(self)
    }
}

impl AsFieldValue for DateTime<Utc> {
    fn as_field_value(&mut self) -> FieldValue<'_> {
        FieldValue::DateTime(self)
    }
}

impl AsFieldValue for Option<DateTime<Utc>> {
    fn as_field_value(&mut self) -> FieldValue<'_> {
        FieldValue::OptionalDateTime(self)
    }
}

impl AsFieldValue for NaiveDate {
    fn as_field_value(&mut self) -> FieldValue<'_> {
        FieldValue::Date(self)
    }
}

impl AsFieldValue for Option<NaiveDate> {
    fn as_field_value(&mut self) -> FieldValue<'_> {
        FieldValue::OptionalDate(self)
    }
}

impl<T: AsFieldValue> AsFieldValue for Vec<T> {
    fn as_field_value(&mut self) -> FieldValue<'_> {
        FieldValue::Sequence(self.iter_mut().map(AsFieldValue::as_field_value).collect())
    }
}

impl<T: AsFieldValue> AsFieldValue for Option<Vec<T>> {
    fn as_field_value(&mut self) -> FieldValue<'_> {
        match self {
            Some(items) => items.as_field_value(),
            None => FieldValue::Absent(Absent::with_default(self, FieldKind::Sequence)),
        }
    }
}

impl<K: ToString, V: AsFieldValue, S> AsFieldValue for HashMap<K, V, S> {
    fn as_field_value(&mut self) -> FieldValue<'_> {
        FieldValue::Map(
            self.iter_mut()
                .map(|(key, value)| (key.to_string(), value.as_field_value()))
                .collect(),
        )
    }
}

impl<K: ToString, V: AsFieldValue> AsFieldValue for BTreeMap<K, V> {
    fn as_field_value(&mut self) -> FieldValue<'_> {
        FieldValue::Map(
            self.iter_mut()
                .map(|(key, value)| (key.to_string(), value.as_field_value()))
                .collect(),
        )
    }
}

impl<K, V, S> AsFieldValue for Option<HashMap<K, V, S>>
where
    K: ToString,
    V: AsFieldValue,
    S: Default,
{
    fn as_field_value(&mut self) -> FieldValue<'_> {
        match self {
            Some(entries) => entries.as_field_value(),
            None => FieldValue::Absent(Absent::with_default(self, FieldKind::Map)),
        }
    }
}

impl<K: ToString, V: AsFieldValue> AsFieldValue for Option<BTreeMap<K, V>> {
    fn as_field_value(&mut self) -> FieldValue<'_> {
        match self {
            Some(entries) => entries.as_field_value(),
            None => FieldValue::Absent(Absent::with_default(self, FieldKind::Map)),
        }
    }
}

crate::impl_scalar_field!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    uuid::Uuid
);
