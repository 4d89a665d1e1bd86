//! Runtime predicate-and-ordering compiler for in-memory record
//! collections: filter and sort by field name against static schema
//! models, with typed value coercion and compiled-shape caching.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

pub(crate) mod cache;

// public exports are one module level down
pub mod enums;
pub mod error;
pub mod filter;
pub mod model;
pub mod obs;
pub mod ops;
pub mod order;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary and entry points.
///

pub mod prelude {
    pub use crate::{
        error::Error,
        model::{FieldKind, FieldModel, RecordModel},
        ops::{
            Criteria, distinct_by, field_value_of_first, filter, first_match_or_default, order_by,
        },
        order::OrderDirection,
        traits::{FieldValues, Record, RecordKind},
        value::Value,
    };
}
