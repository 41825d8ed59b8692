//! LIMIT/OFFSET clause.

use crate::clause::traits::Clause;
use crate::error::{ExprError, ExprResult};
use crate::ordered::OrderedMap;
use crate::value::Value;

/// Discriminator for the two row-window entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitKind {
    Limit,
    Offset,
}

impl LimitKind {
    /// Storage key for this entry.
    pub fn as_str(self) -> &'static str {
        match self {
            LimitKind::Limit => "limit",
            LimitKind::Offset => "offset",
        }
    }
}

/// LIMIT/OFFSET clause component.
///
/// Holds at most two entries, keyed by [`LimitKind`]. An offset is only
/// meaningful together with a limit; rendering rejects the
/// offset-without-limit state instead of silently dropping the offset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LimitOffsetClause {
    entries: OrderedMap<i64>,
}

impl LimitOffsetClause {
    /// Create an empty clause.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit or the offset row count (overwrites).
    pub fn set(&mut self, kind: LimitKind, rows: i64) {
        self.entries.set(kind.as_str(), rows);
    }

    /// Look up one of the two entries.
    pub fn get(&self, kind: LimitKind) -> Option<i64> {
        self.entries.get(kind.as_str()).copied()
    }

    /// Check whether neither entry is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Clause for LimitOffsetClause {
    /// Render `"LIMIT ?,? "` (offset placeholder first), `"LIMIT ? "`, or
    /// the empty string.
    fn render(&self) -> ExprResult<String> {
        match (self.get(LimitKind::Limit), self.get(LimitKind::Offset)) {
            (None, None) => Ok(String::new()),
            (None, Some(_)) => Err(ExprError::InvalidLimitOffset),
            (Some(_), Some(_)) => Ok("LIMIT ?,? ".to_string()),
            (Some(_), None) => Ok("LIMIT ? ".to_string()),
        }
    }

    /// Parameters in placeholder order: `[offset, limit]` or `[limit]`.
    fn params(&self) -> Vec<Value> {
        match (self.get(LimitKind::Limit), self.get(LimitKind::Offset)) {
            (Some(limit), Some(offset)) => vec![Value::Int(offset), Value::Int(limit)],
            (Some(limit), None) => vec![Value::Int(limit)],
            _ => Vec::new(),
        }
    }
}
