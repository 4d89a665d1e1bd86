//! Module: ops
//! Responsibility: the public collection entry points — filtering,
//! ordering, first-match helpers, and distinct projection.
//! Does not own: predicate or order compilation internals.

use crate::{
    cache,
    error::Error,
    filter::CompiledPredicate,
    model::resolve_field_slot,
    obs::metrics,
    order::{OrderDirection, sort_records},
    traits::{FieldValues, Record, RecordKind},
};
use derive_more::{Deref, DerefMut, IntoIterator};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashSet},
    hash::Hash,
};

///
/// Criteria
///
/// Filter criteria as submitted: field key to raw value. Deterministic
/// iteration order keeps compile failures reproducible.
///

#[derive(
    Clone, Debug, Default, Deref, DerefMut, Deserialize, Eq, IntoIterator, PartialEq, Serialize,
)]
pub struct Criteria(BTreeMap<String, String>);

impl Criteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

///
/// Filtered
///
/// Lazy filtering adapter. Rows are pulled and tested one at a time; the
/// predicate was fully validated before this iterator existed.
///

#[derive(Debug)]
pub struct Filtered<I: Iterator> {
    rows: I,
    predicate: CompiledPredicate,
}

impl<I> Iterator for Filtered<I>
where
    I: Iterator,
    I::Item: FieldValues,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = self.rows.next()?;
            if self.predicate.matches(&record) {
                return Some(record);
            }
        }
    }
}

/// Filter a collection by criteria.
///
/// Compilation happens eagerly, so an unknown key or an uncoercible value
/// fails here without consuming a single row.
pub fn filter<I>(rows: I, criteria: &Criteria) -> Result<Filtered<I::IntoIter>, Error>
where
    I: IntoIterator,
    I::Item: Record,
{
    let predicate = CompiledPredicate::compile::<I::Item>(criteria)?;

    Ok(Filtered {
        rows: rows.into_iter(),
        predicate,
    })
}

/// Sort a collection by one field.
///
/// The sort is stable: rows comparing equal keep their input order, in
/// both directions. Fields declared unorderable are rejected up front.
pub fn order_by<I>(
    rows: I,
    field: &str,
    direction: OrderDirection,
) -> Result<Vec<I::Item>, Error>
where
    I: IntoIterator,
    I::Item: Record,
{
    let key = cache::order_shape::<I::Item>(field)?;

    let mut records: Vec<_> = rows.into_iter().collect();
    sort_records(&mut records, key, direction);

    metrics::order_compiled();

    Ok(records)
}

/// First row matching a predicate, or a default-constructed instance when
/// nothing matches.
pub fn first_match_or_default<I, F>(rows: I, mut predicate: F) -> I::Item
where
    I: IntoIterator,
    I::Item: Default,
    F: FnMut(&I::Item) -> bool,
{
    rows.into_iter()
        .find(|record| predicate(record))
        .unwrap_or_default()
}

/// Read one field, as display text, off the first row matching a
/// predicate.
///
/// Returns `Ok(None)` when nothing matches or the field value is null;
/// an unknown field name is an error regardless of matches.
pub fn field_value_of_first<I, F>(
    rows: I,
    mut predicate: F,
    field: &str,
) -> Result<Option<String>, Error>
where
    I: IntoIterator,
    I::Item: Record,
    F: FnMut(&I::Item) -> bool,
{
    let model = <I::Item as RecordKind>::MODEL;
    let slot = resolve_field_slot(model, field)
        .ok_or_else(|| Error::unknown_field(field, model.record_name))?;

    Ok(rows
        .into_iter()
        .find(|record| predicate(record))
        .and_then(|record| record.value_at(slot))
        .filter(|value| !value.is_null())
        .map(|value| value.to_string()))
}

///
/// DistinctBy
///
/// Lazy de-duplication by a caller-derived key; the first row wins per
/// key and relative order is preserved.
///

#[derive(Debug)]
pub struct DistinctBy<I, K, F> {
    rows: I,
    seen: HashSet<K>,
    key_of: F,
}

impl<I, K, F> Iterator for DistinctBy<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = self.rows.next()?;
            if self.seen.insert((self.key_of)(&record)) {
                return Some(record);
            }
        }
    }
}

/// Keep the first row per derived key.
pub fn distinct_by<I, K, F>(rows: I, key_of: F) -> DistinctBy<I::IntoIter, K, F>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    DistinctBy {
        rows: rows.into_iter(),
        seen: HashSet::new(),
        key_of,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_fixtures::{Status, Ticket},
        types::DateTime,
    };

    fn tickets() -> Vec<Ticket> {
        vec![
            Ticket {
                id: 1,
                title: "disk full".into(),
                status: Status::Open,
                count: 2,
                created: DateTime::parse("2024-01-09 08:00:00").unwrap(),
                ..Ticket::default()
            },
            Ticket {
                id: 2,
                title: "printer on fire".into(),
                status: Status::Pending,
                count: 7,
                created: DateTime::parse("2024-01-10 09:30:00").unwrap(),
                ..Ticket::default()
            },
            Ticket {
                id: 3,
                title: "slow login".into(),
                status: Status::Open,
                count: 7,
                created: DateTime::parse("2024-01-11 23:59:59").unwrap(),
                ..Ticket::default()
            },
        ]
    }

    #[test]
    fn filter_is_lazy_and_validates_eagerly() {
        let criteria = Criteria::new().with("Bogus", "1");
        let rows = std::iter::from_fn(|| -> Option<Ticket> {
            panic!("rows must not be consumed when compilation fails")
        });
        assert!(filter(rows, &criteria).is_err());
    }

    #[test]
    fn filter_multi_value_or() {
        let criteria = Criteria::new().with("Count", "2,7");
        let ids: Vec<u64> = filter(tickets(), &criteria)
            .unwrap()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let criteria = Criteria::new().with("Count", "2").with("Status", "Open");
        let ids: Vec<u64> = filter(tickets(), &criteria)
            .unwrap()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn filter_empty_value_matches_everything() {
        let criteria = Criteria::new().with("Count", "");
        let found = filter(tickets(), &criteria).unwrap().count();
        assert_eq!(found, 3);
    }

    #[test]
    fn filter_date_range_covers_whole_days() {
        let criteria = Criteria::new()
            .with("CreatedStart", "2024-01-10")
            .with("CreatedEnd", "2024-01-11");
        let ids: Vec<u64> = filter(tickets(), &criteria)
            .unwrap()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn order_by_is_stable() {
        let sorted = order_by(tickets(), "Count", OrderDirection::Asc).unwrap();
        let ids: Vec<u64> = sorted.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let sorted = order_by(tickets(), "Count", OrderDirection::Desc).unwrap();
        let ids: Vec<u64> = sorted.iter().map(|t| t.id).collect();
        // 2 and 3 tie on count and keep input order.
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn order_by_rejects_unorderable_fields() {
        assert!(matches!(
            order_by(tickets(), "Payload", OrderDirection::Asc).unwrap_err(),
            Error::NotOrderable { .. }
        ));
    }

    #[test]
    fn first_match_or_default_falls_back() {
        let found = first_match_or_default(tickets(), |t| t.count == 7);
        assert_eq!(found.id, 2);

        let fallback = first_match_or_default(tickets(), |t| t.count == 99);
        assert_eq!(fallback, Ticket::default());
    }

    #[test]
    fn field_value_of_first_reads_display_text() {
        let title = field_value_of_first(tickets(), |t| t.id == 2, "Title").unwrap();
        assert_eq!(title.as_deref(), Some("printer on fire"));

        let status = field_value_of_first(tickets(), |t| t.id == 2, "Status").unwrap();
        assert_eq!(status.as_deref(), Some("Pending"));

        // No match.
        let none = field_value_of_first(tickets(), |t| t.id == 99, "Title").unwrap();
        assert_eq!(none, None);

        // Match, but the field value is null.
        let due = field_value_of_first(tickets(), |t| t.id == 1, "Due").unwrap();
        assert_eq!(due, None);

        // Unknown field errors even without a match.
        assert!(field_value_of_first(tickets(), |t| t.id == 99, "Bogus").is_err());
    }

    #[test]
    fn distinct_by_keeps_first_per_key() {
        let ids: Vec<u64> = distinct_by(tickets(), |t| t.count).map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn criteria_round_trips_through_json() {
        let criteria = Criteria::new().with("Count", "2,7").with("Status", "Open");
        let json = serde_json::to_string(&criteria).unwrap();
        let back: Criteria = serde_json::from_str(&json).unwrap();
        assert_eq!(criteria, back);
    }
}
