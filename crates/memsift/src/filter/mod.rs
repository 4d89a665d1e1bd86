//! Module: filter
//! Responsibility: filter-key resolution, token coercion, and predicate
//! compilation/evaluation.
//! Does not own: ordering or the public collection entry points.

mod coerce;
mod predicate;
mod resolve;

pub use coerce::CoerceError;
pub use predicate::CompiledPredicate;
pub use resolve::CompareOp;

pub(crate) use resolve::{FieldShape, resolve_key};
