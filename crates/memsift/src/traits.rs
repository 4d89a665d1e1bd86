use crate::{
    model::{RecordModel, resolve_field_slot},
    value::Value,
};

///
/// RecordKind
///
/// Binds a concrete type to its static schema model. Implemented by the
/// `record_model!` registration macro, never by hand.
///

pub trait RecordKind: 'static {
    const MODEL: &'static RecordModel;
}

///
/// FieldValues
///
/// Slot-based value access for one record instance. Slot order is the
/// model's field order; out-of-range slots return `None`.
///

pub trait FieldValues {
    fn value_at(&self, slot: usize) -> Option<Value>;
}

///
/// Record
///
/// A fully registered record: schema plus value access. This is the only
/// bound the library entry points require.
///

pub trait Record: RecordKind + FieldValues {
    /// Read a field value by name.
    fn get_value(&self, field: &str) -> Option<Value> {
        resolve_field_slot(Self::MODEL, field).and_then(|slot| self.value_at(slot))
    }
}

impl<T> Record for T where T: RecordKind + FieldValues {}
