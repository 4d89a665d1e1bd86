use crate::filter::CoerceError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Compile-step failures. Every variant is detected before any record is
/// evaluated; applying a compiled predicate or order key never fails.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("unknown field '{key}' on {record}")]
    UnknownField { key: String, record: &'static str },

    #[error(transparent)]
    Coercion(#[from] CoerceError),

    #[error("field '{field}' on {record} has no total order")]
    NotOrderable {
        field: String,
        record: &'static str,
    },
}

impl Error {
    pub(crate) fn unknown_field(key: &str, record: &'static str) -> Self {
        Self::UnknownField {
            key: key.to_string(),
            record,
        }
    }

    pub(crate) fn not_orderable(field: &str, record: &'static str) -> Self {
        Self::NotOrderable {
            field: field.to_string(),
            record,
        }
    }
}
