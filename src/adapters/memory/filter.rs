//! Predicate evaluation over JSON records
//!
//! Mirrors how the production database treats filters:
//!
//! - links compare by `{type, id}`, ignoring display names
//! - `is` against a multi-link field matches when any element matches
//! - a dotted path `link.Type.field` reads a field of the linked record,
//!   which in a snapshot is the link's own `code` (or `name`)
//! - a missing field behaves as null, so `not_in` matches it

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::core::ports::Record;
use crate::core::query::{Direction, Operator, OrderBy, Predicate};

/// Resolve a field path against a record
///
/// Only `field` and `link.Type.field` are valid paths; anything else
/// resolves to nothing.
pub fn field_value<'a>(record: &'a Record, path: &str) -> Option<&'a Value> {
    let parts: Vec<&str> = path.split('.').collect();
    match parts.as_slice() {
        [field] => record.get(*field),
        [head, link_type, field] => {
            let link = record.get(*head)?.as_object()?;
            if link.get("type").and_then(Value::as_str) != Some(*link_type) {
                return None;
            }
            link.get(*field).or_else(|| {
                if *field == "code" {
                    link.get("name")
                } else {
                    None
                }
            })
        },
        _ => None,
    }
}

/// Whether a record satisfies one predicate
pub fn matches(record: &Record, predicate: &Predicate) -> bool {
    let actual = field_value(record, predicate.field).unwrap_or(&Value::Null);
    match predicate.operator {
        Operator::Is => is_match(actual, &predicate.value),
        Operator::IsNot => !is_match(actual, &predicate.value),
        Operator::In => in_match(actual, &predicate.value),
        Operator::NotIn => !in_match(actual, &predicate.value),
    }
}

/// Whether a record satisfies every predicate
pub fn matches_all(record: &Record, filters: &[Predicate]) -> bool {
    filters.iter().all(|p| matches(record, p))
}

fn is_match(actual: &Value, expected: &Value) -> bool {
    match actual {
        Value::Array(items) if !expected.is_array() => items.iter().any(|i| same(i, expected)),
        _ => same(actual, expected),
    }
}

fn in_match(actual: &Value, list: &Value) -> bool {
    let Some(candidates) = list.as_array() else {
        return is_match(actual, list);
    };
    candidates.iter().any(|c| is_match(actual, c))
}

/// Value equality with link identity for `{type, id}` objects
fn same(a: &Value, b: &Value) -> bool {
    match (link_key(a), link_key(b)) {
        (Some(ka), Some(kb)) => ka == kb,
        (None, None) => a == b,
        _ => false,
    }
}

fn link_key(value: &Value) -> Option<(&str, i64)> {
    let obj = value.as_object()?;
    Some((obj.get("type")?.as_str()?, obj.get("id")?.as_i64()?))
}

/// Compare two records by a sequence of ordering directives
///
/// Missing values sort after present ones in either direction.
pub fn compare(a: &Record, b: &Record, order: &[OrderBy]) -> Ordering {
    for directive in order {
        let va = field_value(a, directive.field_name).filter(|v| !v.is_null());
        let vb = field_value(b, directive.field_name).filter(|v| !v.is_null());
        let ord = match (va, vb) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => match directive.direction {
                Direction::Asc => compare_values(x, y),
                Direction::Desc => compare_values(y, x),
            },
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => {
                x.as_f64().unwrap_or(0.0).total_cmp(&y.as_f64().unwrap_or(0.0))
            },
        },
        (Value::String(x), Value::String(y)) => match (timestamp(x), timestamp(y)) {
            (Some(tx), Some(ty)) => tx.cmp(&ty),
            _ => x.cmp(y),
        },
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

fn timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).ok()
}
