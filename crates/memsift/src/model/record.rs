use crate::model::field::FieldModel;

///
/// RecordModel
/// Minimal, macro-generated runtime model for one record type.
///

#[derive(Debug)]
pub struct RecordModel {
    /// Fully-qualified Rust type path (for diagnostics and cache keys).
    pub path: &'static str,
    /// Stable external name used in error messages.
    pub record_name: &'static str,
    /// Ordered field list (authoritative: slot order is field order).
    pub fields: &'static [FieldModel],
}

impl RecordModel {
    /// Look up a field by name, returning its slot and model.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<(usize, &'static FieldModel)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.name == name)
    }
}

/// Resolve a field name to its stable slot in the model's field order.
#[must_use]
pub fn resolve_field_slot(model: &RecordModel, name: &str) -> Option<usize> {
    model.fields.iter().position(|field| field.name == name)
}
