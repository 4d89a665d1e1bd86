//! Module: macros
//! Responsibility: declarative registration of record and enum schema
//! models.
//! Does not own: the model types themselves; those live in `model` and
//! `enums`.

///
/// record_model!
///
/// Declares the static `RecordModel` for a type and implements slot-based
/// value access over it. Field order is slot order; each field pairs its
/// external name and kind with an accessor closure.
///
/// ```
/// use memsift::{model::FieldKind, record_model, value::Value};
///
/// #[derive(Default)]
/// struct Gadget {
///     id: u64,
///     label: String,
/// }
///
/// record_model! {
///     static GADGET_MODEL for Gadget {
///         path = "docs::Gadget",
///         name = "Gadget",
///         fields = [
///             ("Id", FieldKind::Uint, |g| Value::Uint(g.id)),
///             ("Label", FieldKind::Text, |g| Value::Text(g.label.clone())),
///         ],
///     }
/// }
/// ```
///

#[macro_export]
macro_rules! record_model {
    (
        $vis:vis static $model:ident for $ty:ty {
            path = $path:expr,
            name = $name:expr,
            fields = [
                $( ($field:expr, $kind:expr, $get:expr) ),+ $(,)?
            ] $(,)?
        }
    ) => {
        $vis static $model: $crate::model::RecordModel = $crate::model::RecordModel {
            path: $path,
            record_name: $name,
            fields: &[
                $(
                    $crate::model::FieldModel {
                        name: $field,
                        kind: $kind,
                    },
                )+
            ],
        };

        impl $crate::traits::RecordKind for $ty {
            const MODEL: &'static $crate::model::RecordModel = &$model;
        }

        impl $crate::traits::FieldValues for $ty {
            fn value_at(&self, slot: usize) -> ::core::option::Option<$crate::value::Value> {
                const ACCESSORS: &[fn(&$ty) -> $crate::value::Value] = &[$( $get, )+];
                ACCESSORS.get(slot).map(|get| get(self))
            }
        }
    };
}

///
/// enum_model!
///
/// Declares the static `EnumModel` for a fieldless enum and implements
/// its value projection. A variant may carry a description after `=>`.
///
/// ```
/// use memsift::enum_model;
///
/// enum Color {
///     Red,
///     Green,
/// }
///
/// enum_model! {
///     static COLOR_MODEL for Color {
///         name = "Color",
///         variants = [
///             Red = 1,
///             Green = 2 => "go",
///         ],
///     }
/// }
/// ```
///

#[macro_export]
macro_rules! enum_model {
    (
        $vis:vis static $model:ident for $ty:ty {
            name = $name:expr,
            variants = [
                $( $variant:ident = $value:expr $(=> $desc:literal)? ),+ $(,)?
            ] $(,)?
        }
    ) => {
        $vis static $model: $crate::enums::EnumModel = $crate::enums::EnumModel {
            name: $name,
            variants: &[
                $(
                    $crate::enums::EnumVariantModel {
                        name: stringify!($variant),
                        value: $value,
                        description: $crate::enum_model!(@desc $( $desc )?),
                    },
                )+
            ],
        };

        impl $crate::enums::EnumValue for $ty {
            const MODEL: &'static $crate::enums::EnumModel = &$model;

            fn to_value_enum(&self) -> $crate::value::ValueEnum {
                match self {
                    $(
                        Self::$variant => $crate::value::ValueEnum {
                            path: $name,
                            variant: stringify!($variant),
                            value: $value,
                        },
                    )+
                }
            }
        }
    };

    (@desc) => {
        ::core::option::Option::None
    };
    (@desc $desc:literal) => {
        ::core::option::Option::Some($desc)
    };
}
