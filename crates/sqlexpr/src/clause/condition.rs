//! WHERE clause built from an ordered conjunction of comparisons.

use crate::clause::traits::Clause;
use crate::error::ExprResult;
use crate::ordered::OrderedMap;
use crate::value::Value;

/// Value side of one condition entry.
///
/// The variant states how many placeholders the entry's fragment embeds:
/// exactly one for `Scalar`, the list length for `List`.
#[derive(Debug, Clone, PartialEq)]
enum ConditionValue {
    /// Single comparison value, one `?`
    Scalar(Value),
    /// IN / NOT IN values; element order matches placeholder order
    List(Vec<Value>),
}

/// WHERE clause component: a flat conjunction of condition fragments.
///
/// Fragments are stored as map keys with their placeholders already embedded
/// (`"age > ?"`, `"id IN (?,?)"`), so text and parameters can never drift
/// apart when entries are reconfigured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionClause {
    conds: OrderedMap<ConditionValue>,
}

impl ConditionClause {
    /// Create an empty condition clause.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scalar comparison.
    ///
    /// `fragment_base` carries the column and operator (`"age >"`,
    /// `"name ="`); the `?` is appended here.
    pub fn set(&mut self, fragment_base: &str, value: impl Into<Value>) {
        self.conds
            .set(format!("{fragment_base} ?"), ConditionValue::Scalar(value.into()));
    }

    /// Add an IN comparison over a list of values.
    ///
    /// Stores `"<fragment_base> IN (?,...,?)"` with one `?` per element. An
    /// empty list stores the constant fragment `1=0` (matches no rows)
    /// rather than invalid `IN ()` SQL.
    pub fn set_in<T: Into<Value>>(&mut self, fragment_base: &str, values: Vec<T>) {
        self.set_list(fragment_base, "IN", "1=0", values);
    }

    /// Add a NOT IN comparison over a list of values.
    ///
    /// An empty list stores the constant fragment `1=1` (matches all rows).
    pub fn set_not_in<T: Into<Value>>(&mut self, fragment_base: &str, values: Vec<T>) {
        self.set_list(fragment_base, "NOT IN", "1=1", values);
    }

    fn set_list<T: Into<Value>>(
        &mut self,
        fragment_base: &str,
        op: &str,
        empty_fragment: &str,
        values: Vec<T>,
    ) {
        if values.is_empty() {
            // every empty list maps onto the same constant fragment key
            self.conds.set(empty_fragment, ConditionValue::List(Vec::new()));
            return;
        }
        let placeholders = vec!["?"; values.len()].join(",");
        self.conds.set(
            format!("{fragment_base} {op} ({placeholders})"),
            ConditionValue::List(values.into_iter().map(Into::into).collect()),
        );
    }

    /// Check whether any condition has been added.
    pub fn is_empty(&self) -> bool {
        self.conds.is_empty()
    }
}

impl Clause for ConditionClause {
    /// Render the WHERE fragment, or the empty string with no conditions.
    fn render(&self) -> ExprResult<String> {
        if self.conds.is_empty() {
            return Ok(String::new());
        }
        let fragments: Vec<&str> = self.conds.keys().collect();
        Ok(format!("WHERE {}", fragments.join(" and ")))
    }

    fn params(&self) -> Vec<Value> {
        let mut params = Vec::new();
        for value in self.conds.values() {
            match value {
                ConditionValue::Scalar(v) => params.push(v.clone()),
                ConditionValue::List(vs) => params.extend(vs.iter().cloned()),
            }
        }
        params
    }
}
