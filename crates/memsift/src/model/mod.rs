mod field;
mod record;

pub use field::{FieldKind, FieldModel};
pub use record::{RecordModel, resolve_field_slot};
