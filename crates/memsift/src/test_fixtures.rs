//! Shared fixtures for unit tests: a small ticket record with every
//! field kind, plus its status enum.

use crate::{
    enums::EnumValue,
    model::FieldKind,
    types::{Date, DateTime},
    value::Value,
};

///
/// Status
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Status {
    #[default]
    Open,
    Pending,
    Closed,
}

enum_model! {
    pub(crate) static STATUS_MODEL for Status {
        name = "Status",
        variants = [
            Open = 1,
            Pending = 2 => "waiting for triage",
            Closed = 3 => "resolved and closed",
        ],
    }
}

///
/// Ticket
///
/// `count_start` is a real field named like a range key, to pin down
/// direct-match precedence.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Ticket {
    pub id: u64,
    pub title: String,
    pub status: Status,
    pub count: u64,
    pub count_start: u64,
    pub score: f64,
    pub urgent: bool,
    pub created: DateTime,
    pub due: Option<Date>,
    pub payload: Vec<u8>,
}

record_model! {
    pub(crate) static TICKET_MODEL for Ticket {
        path = "memsift::test_fixtures::Ticket",
        name = "Ticket",
        fields = [
            ("Id", FieldKind::Uint, |t| Value::Uint(t.id)),
            ("Title", FieldKind::Text, |t| Value::Text(t.title.clone())),
            ("Status", FieldKind::Enum(&STATUS_MODEL), |t| Value::Enum(t.status.to_value_enum())),
            ("Count", FieldKind::Uint, |t| Value::Uint(t.count)),
            ("CountStart", FieldKind::Uint, |t| Value::Uint(t.count_start)),
            ("Score", FieldKind::Float, |t| Value::Float(t.score)),
            ("Urgent", FieldKind::Bool, |t| Value::Bool(t.urgent)),
            ("Created", FieldKind::DateTime, |t| Value::DateTime(t.created)),
            ("Due", FieldKind::Date, |t| Value::from(t.due)),
            ("Payload", FieldKind::Structured, |_| Value::Null),
        ],
    }
}
