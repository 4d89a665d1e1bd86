//! Module: cache
//! Responsibility: process-wide memoization of compiled per-key shapes,
//! keyed by record path and filter key.
//! Does not own: shape construction; builders live in `filter` and `order`.

use crate::{
    error::Error,
    filter::{FieldShape, resolve_key},
    obs::metrics,
    order::{OrderKey, resolve_order_key},
    traits::RecordKind,
};
use std::{
    collections::BTreeMap,
    sync::{PoisonError, RwLock},
};

///
/// ShapeCache
///
/// Read-mostly map of compiled shapes. Concurrent first builds of the
/// same key may race; shapes are pure functions of static models, so the
/// first insert wins and later builds are discarded.
///

pub(crate) struct ShapeCache<T> {
    shapes: RwLock<BTreeMap<String, T>>,
}

impl<T: Copy> ShapeCache<T> {
    pub(crate) const fn new() -> Self {
        Self {
            shapes: RwLock::new(BTreeMap::new()),
        }
    }

    pub(crate) fn get_or_build<E>(
        &self,
        key: &str,
        build: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        let hit = self
            .shapes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied();

        if let Some(shape) = hit {
            metrics::shape_cache_hit();
            return Ok(shape);
        }

        // Build outside the write lock; resolution failures never occupy
        // a cache slot.
        let built = build()?;
        metrics::shape_cache_miss();

        let mut shapes = self.shapes.write().unwrap_or_else(PoisonError::into_inner);
        Ok(*shapes.entry(key.to_string()).or_insert(built))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.shapes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

static WHERE_SHAPES: ShapeCache<FieldShape> = ShapeCache::new();
static ORDER_SHAPES: ShapeCache<OrderKey> = ShapeCache::new();

/// Fetch or build the filter shape for one key of a record type.
pub(crate) fn where_shape<R: RecordKind>(key: &str) -> Result<FieldShape, Error> {
    WHERE_SHAPES.get_or_build(&cache_key(R::MODEL.path, key), || {
        resolve_key(R::MODEL, key)
    })
}

/// Fetch or build the order key for one field of a record type.
pub(crate) fn order_shape<R: RecordKind>(field: &str) -> Result<OrderKey, Error> {
    ORDER_SHAPES.get_or_build(&cache_key(R::MODEL.path, field), || {
        resolve_order_key(R::MODEL, field)
    })
}

// The record path namespaces keys so same-named fields of different
// record types never collide.
fn cache_key(path: &str, key: &str) -> String {
    format!("{path}::{key}")
}

///
/// TESTS
///
