use crate::{
    enums::EnumCoerceError,
    filter::resolve::{FieldShape, RangeBound},
    model::FieldKind,
    types::{Date, DateTime},
    value::Value,
};
use thiserror::Error as ThisError;

///
/// CoerceError
///
/// A raw criteria token could not be converted to the field's declared
/// kind. Fatal to the compile step; never surfaced per record.
///

#[derive(Debug, ThisError)]
pub enum CoerceError {
    #[error("cannot coerce '{token}' to {kind} for field '{field}'")]
    InvalidToken {
        field: &'static str,
        kind: &'static str,
        token: String,
    },

    #[error("field '{field}': {source}")]
    Enum {
        field: &'static str,
        #[source]
        source: EnumCoerceError,
    },

    #[error("field '{field}' is not filterable")]
    NotFilterable { field: &'static str },
}

/// Split a raw criteria value into scalar tokens.
///
/// Text fields never split; everything else splits on `,` the way the
/// multi-value OR convention requires.
pub(crate) fn tokens<'a>(kind: FieldKind, raw: &'a str) -> Vec<&'a str> {
    if kind.splits_on_comma() {
        raw.split(',').collect()
    } else {
        vec![raw]
    }
}

/// Coerce one token to the shape's declared kind.
///
/// Bare dates against a `DateTime` field widen to the day bound the
/// shape's range end names: `Start` → 00:00:00.000, `End` → 23:59:59.999.
pub(crate) fn coerce_token(shape: &FieldShape, token: &str) -> Result<Value, CoerceError> {
    let invalid = || CoerceError::InvalidToken {
        field: shape.name,
        kind: shape.kind.label(),
        token: token.to_string(),
    };

    match shape.kind {
        FieldKind::Bool => parse_bool(token).map(Value::Bool).ok_or_else(invalid),
        FieldKind::Int => token.parse::<i64>().map(Value::Int).map_err(|_| invalid()),
        FieldKind::Uint => token.parse::<u64>().map(Value::Uint).map_err(|_| invalid()),
        FieldKind::Float => token
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| invalid()),
        FieldKind::Date => Date::parse(token).map(Value::Date).ok_or_else(invalid),
        FieldKind::DateTime => coerce_datetime(shape.bound, token).ok_or_else(invalid),
        FieldKind::Enum(model) => model
            .coerce(token)
            .map(Value::Enum)
            .map_err(|source| CoerceError::Enum {
                field: shape.name,
                source,
            }),
        FieldKind::Text => Ok(Value::Text(token.to_string())),
        FieldKind::Structured => Err(CoerceError::NotFilterable { field: shape.name }),
    }
}

fn coerce_datetime(bound: RangeBound, token: &str) -> Option<Value> {
    // A date-only token widens to an inclusive day bound; a full
    // timestamp passes through unchanged.
    if let Some(date) = Date::parse(token) {
        let instant = match bound {
            RangeBound::End => DateTime::day_end(date),
            RangeBound::Start | RangeBound::None => DateTime::day_start(date),
        };
        return Some(Value::DateTime(instant));
    }

    DateTime::parse(token).map(Value::DateTime)
}

fn parse_bool(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case("true") || token == "1" {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") || token == "0" {
        Some(false)
    } else {
        None
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        filter::resolve::resolve_key,
        test_fixtures::{Status, Ticket},
        traits::RecordKind,
    };

    fn shape(key: &str) -> FieldShape {
        resolve_key(Ticket::MODEL, key).unwrap()
    }

    #[test]
    fn text_raw_value_is_never_split() {
        assert_eq!(tokens(FieldKind::Text, "a,b,c"), vec!["a,b,c"]);
        assert_eq!(tokens(FieldKind::Int, "1,3"), vec!["1", "3"]);
    }

    #[test]
    fn numeric_tokens_coerce() {
        assert_eq!(
            coerce_token(&shape("Count"), "42").unwrap(),
            Value::Uint(42)
        );
        assert_eq!(
            coerce_token(&shape("Score"), "-1.5").unwrap(),
            Value::Float(-1.5)
        );
    }

    #[test]
    fn bool_tokens_accept_word_and_digit_forms() {
        assert_eq!(
            coerce_token(&shape("Urgent"), "True").unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            coerce_token(&shape("Urgent"), "0").unwrap(),
            Value::Bool(false)
        );
        assert!(coerce_token(&shape("Urgent"), "yes").is_err());
    }

    #[test]
    fn bad_numeric_token_is_a_coercion_error() {
        let err = coerce_token(&shape("Count"), "abc").unwrap_err();
        assert!(matches!(
            err,
            CoerceError::InvalidToken { field: "Count", kind: "Uint", .. }
        ));
    }

    #[test]
    fn enum_token_routes_through_the_model() {
        assert_eq!(
            coerce_token(&shape("Status"), "Open").unwrap(),
            Value::Enum(crate::enums::EnumValue::to_value_enum(&Status::Open))
        );
        assert!(matches!(
            coerce_token(&shape("Status"), "Bogus").unwrap_err(),
            CoerceError::Enum { field: "Status", .. }
        ));
    }

    #[test]
    fn bare_date_widens_to_day_bounds_on_datetime_fields() {
        let start = coerce_token(&shape("CreatedStart"), "2024-01-10").unwrap();
        let end = coerce_token(&shape("CreatedEnd"), "2024-01-10").unwrap();
        let date = Date::parse("2024-01-10").unwrap();

        assert_eq!(start, Value::DateTime(DateTime::day_start(date)));
        assert_eq!(end, Value::DateTime(DateTime::day_end(date)));
    }

    #[test]
    fn full_timestamp_token_passes_through() {
        let bound = coerce_token(&shape("CreatedEnd"), "2024-01-10 12:00:00").unwrap();
        assert_eq!(
            bound,
            Value::DateTime(DateTime::parse("2024-01-10 12:00:00").unwrap())
        );
    }

    #[test]
    fn structured_field_is_not_filterable() {
        assert!(matches!(
            coerce_token(&shape("Payload"), "x").unwrap_err(),
            CoerceError::NotFilterable { field: "Payload" }
        ));
    }
}
