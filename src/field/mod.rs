//! Field descriptors for auto-fillable request objects.
//!
//! A request object exposes its writable fields through [`Populate::fields`]
//! as a list of named [`FieldValue`]s: mutable views into the object, tagged
//! by kind. The populator pattern-matches on the variants instead of
//! inspecting types at runtime.
//!
//! Most types declare their descriptors with [`impl_populate!`](crate::impl_populate):
//!
//! ```rust
//! use api_fixtures::impl_populate;
//!
//! #[derive(Debug, Default)]
//! struct Contact {
//!     email: String,
//!     phone: Option<String>,
//!     retries: u32,
//! }
//!
//! impl_populate!(Contact {
//!     "email" => email,
//!     "phone" => phone,
//!     "retries" => retries,
//! });
//! ```
//!
//! Field values are obtained through [`AsFieldValue`], which is implemented
//! for text, chrono dates, scalars, sequences, maps, every [`Populate`] type
//! and `Option`s of those.

mod macros;
mod value;

pub use value::{Absent, AsFieldValue, FieldValue};

use crate::classify::FieldKind;

/// A request object whose fields can be auto-filled.
pub trait Populate {
    /// Name used in reports and errors.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Writable fields, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

impl<T: Populate + ?Sized> Populate for Box<T> {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn fields(&mut self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

/// One named, writable field of a request object.
#[derive(Debug)]
pub struct Field<'a> {
    /// Field name as matched by the classifier and the exclusion set
    pub name: &'static str,
    /// Mutable view of the field's value
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// Create a field descriptor.
    pub fn new(name: &'static str, value: FieldValue<'a>) -> Self {
        Self { name, value }
    }

    /// Declared kind of the field.
    pub fn kind(&self) -> FieldKind {
        self.value.kind()
    }
}
