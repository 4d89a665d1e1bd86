//! Module: obs
//! Responsibility: lightweight runtime observability counters.
//! Does not own: any query semantics; counters are advisory only.

pub mod metrics;
