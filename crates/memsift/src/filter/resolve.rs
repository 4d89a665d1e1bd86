use crate::{
    error::Error,
    model::{FieldKind, RecordModel},
};
use std::fmt;

///
/// CompareOp
///
/// Comparison mode derived once per filter key from the key's suffix.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Eq => "==",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
        };
        write!(f, "{label}")
    }
}

///
/// RangeBound
///
/// Which end of the `Start`/`End` range convention a filter key named.
/// Drives bare-date widening during coercion.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum RangeBound {
    None,
    Start,
    End,
}

///
/// FieldShape
///
/// The compiled, value-free shape of one filter key: field slot, declared
/// kind, and comparison mode. This is the cached artifact; filter values
/// are late-bound per compile and never stored here.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FieldShape {
    pub slot: usize,
    pub name: &'static str,
    pub kind: FieldKind,
    pub op: CompareOp,
    pub bound: RangeBound,
}

/// Resolve a filter key against a record model.
///
/// A direct field match always wins, even for a field literally named
/// `CountStart`. Only then are the `Start`/`End` suffixes tried against
/// the stripped name.
pub(crate) fn resolve_key(model: &'static RecordModel, key: &str) -> Result<FieldShape, Error> {
    if let Some((slot, field)) = model.field(key) {
        return Ok(FieldShape {
            slot,
            name: field.name,
            kind: field.kind,
            op: CompareOp::Eq,
            bound: RangeBound::None,
        });
    }

    if let Some(stripped) = key.strip_suffix("Start")
        && let Some((slot, field)) = model.field(stripped)
    {
        return Ok(FieldShape {
            slot,
            name: field.name,
            kind: field.kind,
            op: CompareOp::Gte,
            bound: RangeBound::Start,
        });
    }

    if let Some(stripped) = key.strip_suffix("End")
        && let Some((slot, field)) = model.field(stripped)
    {
        return Ok(FieldShape {
            slot,
            name: field.name,
            kind: field.kind,
            op: CompareOp::Lte,
            bound: RangeBound::End,
        });
    }

    Err(Error::unknown_field(key, model.record_name))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, test_fixtures::Ticket, traits::RecordKind};

    #[test]
    fn direct_key_resolves_with_eq() {
        let shape = resolve_key(Ticket::MODEL, "Count").unwrap();
        assert_eq!(shape.name, "Count");
        assert_eq!(shape.op, CompareOp::Eq);
        assert_eq!(shape.bound, RangeBound::None);
    }

    #[test]
    fn start_suffix_resolves_with_gte() {
        let shape = resolve_key(Ticket::MODEL, "CreatedStart").unwrap();
        assert_eq!(shape.name, "Created");
        assert_eq!(shape.op, CompareOp::Gte);
        assert_eq!(shape.bound, RangeBound::Start);
    }

    #[test]
    fn end_suffix_resolves_with_lte() {
        let shape = resolve_key(Ticket::MODEL, "CreatedEnd").unwrap();
        assert_eq!(shape.name, "Created");
        assert_eq!(shape.op, CompareOp::Lte);
        assert_eq!(shape.bound, RangeBound::End);
    }

    #[test]
    fn direct_match_beats_suffix_stripping() {
        // Ticket declares both `Count` and `CountStart`.
        let shape = resolve_key(Ticket::MODEL, "CountStart").unwrap();
        assert_eq!(shape.name, "CountStart");
        assert_eq!(shape.op, CompareOp::Eq);
        assert_eq!(shape.bound, RangeBound::None);
    }

    #[test]
    fn unknown_key_fails() {
        let err = resolve_key(Ticket::MODEL, "Bogus").unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownField { ref key, record } if key == "Bogus" && record == "Ticket"
        ));
    }

    #[test]
    fn suffix_with_unknown_base_fails() {
        assert!(resolve_key(Ticket::MODEL, "BogusStart").is_err());
        assert!(resolve_key(Ticket::MODEL, "BogusEnd").is_err());
    }
}
