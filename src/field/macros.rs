//! Declarative helpers for implementing the field traits.

/// Implement [`Populate`](crate::field::Populate) from a list of
/// `"name" => field` pairs.
///
/// The string is the name the classifier and the exclusion set see, normally
/// the field's wire name. A pair may carry a kind override:
///
/// - `as scalar` for a field the populator must never touch, such as a
///   caller-defined enum;
/// - `as no_default` for an `Option<T>` whose `T` has no `Default`; a `None`
///   value is then reported as skipped instead of being constructed.
///
/// ```rust
/// use api_fixtures::impl_populate;
///
/// #[derive(Debug, Clone, Copy, Default)]
/// enum Status { #[default] Active }
///
/// #[derive(Debug)]
/// struct Card { number: String }
///
/// impl_populate!(Card { "number" => number });
///
/// #[derive(Debug, Default)]
/// struct Account {
///     email: String,
///     status: Status,
///     card: Option<Card>,
/// }
///
/// impl_populate!(Account {
///     "email" => email,
///     "status" => status as scalar,
///     "card" => card as no_default,
/// });
/// ```
#[macro_export]
macro_rules! impl_populate {
    (@value $place:expr) => {
        $crate::field::AsFieldValue::as_field_value(&mut $place)
    };
    (@value $place:expr, scalar) => {
        $crate::field::FieldValue::Scalar
    };
    (@value $place:expr, no_default) => {
        $crate::field::FieldValue::optional_record(&mut $place)
    };
    (
        $type:ty {
            $($name:literal => $field:ident $(as $kind:ident)?),* $(,)?
        }
    ) => {
        impl $crate::field::Populate for $type {
            fn type_name(&self) -> &'static str {
                stringify!($type)
            }

            fn fields(&mut self) -> Vec<$crate::field::Field<'_>> {
                vec![
                    $(
                        $crate::field::Field::new(
                            $name,
                            $crate::impl_populate!(@value self.$field $(, $kind)?),
                        )
                    ),*
                ]
            }
        }
    };
}

/// Implement [`AsFieldValue`](crate::field::AsFieldValue) for types the
/// populator treats as opaque scalars, along with their `Option`s.
///
/// Only usable inside this crate for foreign types; downstream crates mark
/// their own scalar fields with `as scalar` in [`impl_populate!`].
#[macro_export]
#[doc(hidden)]
macro_rules! impl_scalar_field {
    ($($type:ty),* $(,)?) => {
        $(
            impl $crate::field::AsFieldValue for $type {
                fn as_field_value(&mut self) -> $crate::field::FieldValue<'_> {
                    $crate::field::FieldValue::Scalar
                }
            }

            impl $crate::field::AsFieldValue for Option<$type> {
                fn as_field_value(&mut self) -> $crate::field::FieldValue<'_> {
                    $crate::field::FieldValue::Scalar
                }
            }
        )*
    };
}
