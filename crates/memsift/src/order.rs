//! Module: order
//! Responsibility: order-key compilation and stable in-memory sorting.
//! Does not own: the shape cache or the public entry points.

use crate::{
    error::Error,
    model::RecordModel,
    traits::FieldValues,
    value::{Value, canonical_cmp},
};
use serde::{Deserialize, Serialize};

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

///
/// OrderKey
///
/// The compiled, value-free shape of one ordering request: the field slot
/// to read and its name for diagnostics. Orderability is checked once at
/// build time, never per comparison.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct OrderKey {
    pub slot: usize,
    pub name: &'static str,
}

/// Resolve an ordering field against a record model.
///
/// Unlike filter keys, ordering names a field directly; the `Start`/`End`
/// convention does not apply here.
pub(crate) fn resolve_order_key(
    model: &'static RecordModel,
    field: &str,
) -> Result<OrderKey, Error> {
    let (slot, field_model) = model
        .field(field)
        .ok_or_else(|| Error::unknown_field(field, model.record_name))?;

    if !field_model.kind.is_orderable() {
        return Err(Error::not_orderable(field_model.name, model.record_name));
    }

    Ok(OrderKey {
        slot,
        name: field_model.name,
    })
}

/// Stable sort of records by one compiled key.
///
/// Absent and null values sort before every present value; records that
/// compare equal keep their input order in both directions.
pub(crate) fn sort_records<R: FieldValues>(
    records: &mut [R],
    key: OrderKey,
    direction: OrderDirection,
) {
    records.sort_by(|left, right| {
        let ordering = canonical_cmp(&slot_value(left, key.slot), &slot_value(right, key.slot));
        match direction {
            OrderDirection::Asc => ordering,
            OrderDirection::Desc => ordering.reverse(),
        }
    });
}

fn slot_value<R: FieldValues>(record: &R, slot: usize) -> Value {
    record.value_at(slot).unwrap_or(Value::Null)
}

///
/// TESTS
///
