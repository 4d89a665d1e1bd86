use crate::{
    cache,
    error::Error,
    filter::{
        coerce,
        resolve::{CompareOp, FieldShape},
    },
    obs::metrics,
    ops::Criteria,
    traits::{FieldValues, RecordKind},
    value::{Value, compare_eq, compare_order},
};
use std::cmp::Ordering;

///
/// FieldPredicate
///
/// One field's compiled test: a cached shape plus the coerced filter
/// values bound at compile time. Under `Eq` the values OR together;
/// range modes carry exactly one value by construction.
///

#[derive(Clone, Debug)]
struct FieldPredicate {
    shape: FieldShape,
    values: Vec<Value>,
}

///
/// CompiledPredicate
///
/// Slot-resolved predicate program for record filtering: the AND of all
/// per-field tests. Evaluation is a pure function of the record — no
/// hidden state, safe to apply concurrently.
///

#[derive(Clone, Debug)]
pub struct CompiledPredicate {
    fields: Vec<FieldPredicate>,
}

impl CompiledPredicate {
    /// Compile filter criteria against a record type's model.
    ///
    /// Every resolution and coercion failure surfaces here, before any
    /// record is evaluated. Entries with an empty raw value contribute no
    /// constraint.
    pub fn compile<R: RecordKind>(criteria: &Criteria) -> Result<Self, Error> {
        let mut fields = Vec::new();

        for (key, raw) in criteria.iter() {
            if raw.is_empty() {
                continue;
            }

            let shape = cache::where_shape::<R>(key)?;
            let mut values = Vec::with_capacity(1);
            for token in coerce::tokens(shape.kind, raw) {
                values.push(coerce::coerce_token(&shape, token)?);
            }

            fields.push(FieldPredicate { shape, values });
        }

        metrics::predicate_compiled();

        Ok(Self { fields })
    }

    /// Evaluate the compiled predicate against one record.
    #[must_use]
    pub fn matches<R: FieldValues>(&self, record: &R) -> bool {
        self.fields.iter().all(|field| eval_field(field, record))
    }

    /// True when no criteria survived compilation; every record matches.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.fields.is_empty()
    }
}

// Evaluate one field test; a missing or null field value never matches.
fn eval_field<R: FieldValues>(field: &FieldPredicate, record: &R) -> bool {
    let Some(actual) = record.value_at(field.shape.slot) else {
        return false;
    };
    if actual.is_null() {
        return false;
    }

    let ordered = |check: fn(Ordering) -> bool| {
        field
            .values
            .first()
            .is_some_and(|bound| compare_order(&actual, bound).is_some_and(check))
    };

    match field.shape.op {
        CompareOp::Eq => field
            .values
            .iter()
            .any(|value| compare_eq(&actual, value).unwrap_or(false)),
        CompareOp::Gt => ordered(Ordering::is_gt),
        CompareOp::Gte => ordered(Ordering::is_ge),
        CompareOp::Lt => ordered(Ordering::is_lt),
        CompareOp::Lte => ordered(Ordering::is_le),
    }
}

///
/// TESTS
///
