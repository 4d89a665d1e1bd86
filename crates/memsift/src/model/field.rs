use crate::enums::EnumModel;

///
/// FieldModel
/// Runtime field metadata used by resolution and compilation.
///

#[derive(Debug)]
pub struct FieldModel {
    /// Field name as used in filter keys and ordering.
    pub name: &'static str,
    /// Declared runtime type shape.
    pub kind: FieldKind,
}

///
/// FieldKind
///
/// Minimal type surface needed by the resolver and compilers.
/// Aligned with `Value` variants; this is a lossy projection of the
/// record's Rust types.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Bool,
    Date,
    DateTime,
    Enum(&'static EnumModel),
    Float,
    Int,
    Text,
    Uint,

    /// Marker for fields that are neither filterable nor orderable.
    Structured,
}

impl FieldKind {
    /// Stable label used in coercion error messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Enum(_) => "Enum",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::Text => "Text",
            Self::Uint => "Uint",
            Self::Structured => "Structured",
        }
    }

    /// Whether values of this kind carry a total order.
    #[must_use]
    pub const fn is_orderable(&self) -> bool {
        !matches!(self, Self::Structured)
    }

    /// Whether raw criteria values may target this kind at all.
    #[must_use]
    pub const fn is_filterable(&self) -> bool {
        !matches!(self, Self::Structured)
    }

    /// Whether a raw criteria value is split on `,` into scalar tokens.
    ///
    /// Text fields are never split: a comma inside a string value is
    /// literal.
    #[must_use]
    pub const fn splits_on_comma(&self) -> bool {
        !matches!(self, Self::Text | Self::Structured)
    }
}
