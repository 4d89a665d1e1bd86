mod compare;


use crate::types::{Date, DateTime};
use serde::Serialize;
use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

pub use compare::{canonical_cmp, compare_eq, compare_order, strict_order_cmp};

///
/// Value
///
/// Tagged runtime value read from record fields and coerced from filter
/// criteria.
///
/// Null → the field's value is `Option::None`.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Date(Date),
    DateTime(DateTime),
    Enum(ValueEnum),
    Float(f64),
    Int(i64),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Stable canonical rank used for cross-variant ordering surfaces.
    #[must_use]
    pub(crate) const fn canonical_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) => 2,
            Self::Uint(_) => 3,
            Self::Float(_) => 4,
            Self::Date(_) => 5,
            Self::DateTime(_) => 6,
            Self::Text(_) => 7,
            Self::Enum(_) => 8,
        }
    }

    /// Case-insensitive substring check for text values.
    ///
    /// Returns `None` when either side is not text.
    #[must_use]
    pub fn text_contains_ci(&self, needle: &Self) -> Option<bool> {
        let (haystack, needle) = (self.as_text()?, needle.as_text()?);
        if needle.is_empty() {
            return Some(true);
        }

        Some(fold_ci(haystack).contains(&fold_ci(needle)))
    }
}

fn fold_ci(s: &str) -> String {
    if s.is_ascii() {
        return s.to_ascii_lowercase();
    }
    s.to_lowercase()
}

// Display renders the value the way callers expect to see it in listings;
// `Null` has no rendering and is handled before display by the ops layer.
impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{v}"),
            Self::DateTime(v) => write!(f, "{v}"),
            Self::Enum(v) => write!(f, "{}", v.variant),
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Null => Ok(()),
            Self::Text(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}

#[macro_export]
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    Date     => Date,
    DateTime => DateTime,
    bool     => Bool,
    f32      => Float,
    f64      => Float,
    i8       => Int,
    i16      => Int,
    i32      => Int,
    i64      => Int,
    &str     => Text,
    String   => Text,
    u8       => Uint,
    u16      => Uint,
    u32      => Uint,
    u64      => Uint,
}

impl<T> From<Option<T>> for Value
where
    T: Into<Self>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

///
/// ValueEnum
/// Handles the Enum case: the member of a static `EnumModel`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ValueEnum {
    /// The owning model's stable name.
    pub path: &'static str,
    /// Variant name.
    pub variant: &'static str,
    /// Underlying integer value.
    pub value: i64,
}

// Enums order by underlying value, then variant name for determinism.
impl Ord for ValueEnum {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.variant.cmp(other.variant))
    }
}

impl PartialOrd for ValueEnum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
