//! Name-based field classification.
//!
//! Maps a field's name and declared kind to the rule the populator applies.
//! Matching is case-insensitive substring matching on the field name, so one
//! engine serves every request shape without per-type mapping tables. A
//! misleading field name yields a misleading value; seed such fields
//! explicitly.

use serde::{Deserialize, Serialize};

/// Declared kind of a request object field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Textual value
    Text,
    /// Native date or date/time value
    Date,
    /// Numeric, boolean, enumeration or identifier value
    Scalar,
    /// Nested structured record
    Record,
    /// Ordered sequence
    Sequence,
    /// Keyed map
    Map,
}

/// Rule applied to a native date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateRule {
    /// Thirty days ahead
    Expiry,
    /// Seven days back
    Recent,
}

impl DateRule {
    /// Offset from now, in days, this rule produces.
    pub fn offset_days(self) -> i64 {
        match self {
            DateRule::Expiry => 30,
            DateRule::Recent => -7,
        }
    }
}

/// Synthesis rule chosen for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FillRule {
    /// `Auto_xxxxx@<domain>`
    Email,
    /// Ten decimal digits
    PhoneDigits,
    /// `yyyy-MM-dd` between 15 and 365 days ahead
    FutureDate,
    /// `yyyy-MM-dd` between 1 and 30 days back
    PastDate,
    /// `Auto_` followed by the configured number of letters
    GenericToken,
    /// Native date shifted from now
    DateValue(DateRule),
    /// Descend into the nested value
    Recurse,
    /// Never synthesized
    LeaveAsIs,
}

/// Number of digits synthesized for phone-like fields.
pub const PHONE_DIGITS: usize = 10;

/// Day range for expiry-like text dates.
pub const FUTURE_DATE_DAYS: (i64, i64) = (15, 365);

/// Day range for other text dates.
pub const PAST_DATE_DAYS: (i64, i64) = (1, 30);

const PHONE_MARKERS: [&str; 3] = ["mobile", "telephone", "phone"];

/// Rule for a text field. First match wins.
pub fn classify_text(name: &str) -> FillRule {
    let lower = name.to_lowercase();

    if lower.contains("email") {
        FillRule::Email
    } else if PHONE_MARKERS.iter().any(|marker| lower.contains(marker)) {
        FillRule::PhoneDigits
    } else if lower.contains("expir") && lower.contains("date") {
        FillRule::FutureDate
    } else if lower.contains("date") {
        FillRule::PastDate
    } else {
        FillRule::GenericToken
    }
}

/// Rule for a native date field.
pub fn classify_date(name: &str) -> DateRule {
    if name.to_lowercase().contains("expir") {
        DateRule::Expiry
    } else {
        DateRule::Recent
    }
}

/// Rule for any field kind.
pub fn classify(name: &str, kind: FieldKind) -> FillRule {
    match kind {
        FieldKind::Text => classify_text(name),
        FieldKind::Date => FillRule::DateValue(classify_date(name)),
        FieldKind::Scalar => FillRule::LeaveAsIs,
        FieldKind::Record | FieldKind::Sequence | FieldKind::Map => FillRule::Recurse,
    }
}
