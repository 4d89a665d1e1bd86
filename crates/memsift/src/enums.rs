use crate::value::ValueEnum;
use thiserror::Error as ThisError;

///
/// EnumVariantModel
/// One member of a static enum model.
///

#[derive(Debug, Eq, PartialEq)]
pub struct EnumVariantModel {
    /// Variant name as written in Rust.
    pub name: &'static str,
    /// Underlying integer value.
    pub value: i64,
    /// Optional human-readable description.
    pub description: Option<&'static str>,
}

///
/// EnumModel
///
/// Static coercion table for one enum type. This is the whole enum
/// collaborator surface: record schemas without enum fields never touch
/// it.
///

#[derive(Debug, Eq, PartialEq)]
pub struct EnumModel {
    /// Stable external name, used in cache keys and error messages.
    pub name: &'static str,
    /// Declared members, in declaration order.
    pub variants: &'static [EnumVariantModel],
}

impl EnumModel {
    /// Coerce a raw token into a member of this enum.
    ///
    /// Resolution order: member name (ASCII case-insensitive) or
    /// underlying integer value first, then exact description match.
    pub fn coerce(&'static self, raw: &str) -> Result<ValueEnum, EnumCoerceError> {
        if let Some(variant) = self
            .variants
            .iter()
            .find(|variant| variant.name.eq_ignore_ascii_case(raw))
        {
            return Ok(self.value_enum(variant));
        }

        if let Ok(value) = raw.parse::<i64>()
            && let Some(variant) = self.variants.iter().find(|variant| variant.value == value)
        {
            return Ok(self.value_enum(variant));
        }

        self.variants
            .iter()
            .find(|variant| variant.description == Some(raw))
            .map(|variant| self.value_enum(variant))
            .ok_or(EnumCoerceError {
                name: self.name,
                raw: raw.to_string(),
            })
    }

    /// Reverse lookup: the description of a member, by variant name.
    #[must_use]
    pub fn description_of(&self, variant: &str) -> Option<&'static str> {
        self.variants
            .iter()
            .find(|candidate| candidate.name == variant)
            .and_then(|candidate| candidate.description)
    }

    /// Number of declared members.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// `(value, label)` pairs for selection sources; the label is the
    /// description when present, the variant name otherwise.
    pub fn options(&self) -> impl Iterator<Item = (i64, &'static str)> {
        self.variants
            .iter()
            .map(|variant| (variant.value, variant.description.unwrap_or(variant.name)))
    }

    const fn value_enum(&'static self, variant: &EnumVariantModel) -> ValueEnum {
        ValueEnum {
            path: self.name,
            variant: variant.name,
            value: variant.value,
        }
    }
}

///
/// EnumValue
///
/// Binds a domain enum to its static model and value projection.
///

pub trait EnumValue {
    const MODEL: &'static EnumModel;

    fn to_value_enum(&self) -> ValueEnum;
}

///
/// EnumCoerceError
///
/// A raw token matched neither a member name, an underlying value, nor a
/// description.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[error("enum {name} has no member matching '{raw}'")]
pub struct EnumCoerceError {
    pub name: &'static str,
    pub raw: String,
}

///
/// TESTS
///
