//! GROUP BY / HAVING clause.

use crate::clause::traits::Clause;
use crate::error::ExprResult;
use crate::ordered::OrderedMap;
use crate::value::Value;

/// GROUP BY clause component with its dependent HAVING conditions.
///
/// HAVING entries are inert while no grouping expression is set: they render
/// no text and contribute no parameters. Callers can stage having conditions
/// up front and switch them on later by setting the grouping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupByHavingClause {
    group_by: String,
    having: OrderedMap<Value>,
}

impl GroupByHavingClause {
    /// Create an empty clause.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grouping expression (overwrites any previous one).
    ///
    /// The expression passes through verbatim; an empty string means no
    /// grouping.
    pub fn set_group_by(&mut self, expr: &str) {
        self.group_by = expr.to_string();
    }

    /// Add a HAVING comparison.
    ///
    /// `fragment_base` carries the aggregate and operator
    /// (`"count(*) >"`); the `?` is appended here.
    pub fn set_having(&mut self, fragment_base: &str, value: impl Into<Value>) {
        self.having
            .set(format!("{fragment_base} ?"), value.into());
    }

    fn has_grouping(&self) -> bool {
        !self.group_by.is_empty()
    }
}

impl Clause for GroupByHavingClause {
    fn render(&self) -> ExprResult<String> {
        if !self.has_grouping() {
            return Ok(String::new());
        }
        if self.having.is_empty() {
            return Ok(format!("GROUP BY {} ", self.group_by));
        }
        let fragments: Vec<&str> = self.having.keys().collect();
        Ok(format!(
            "GROUP BY {} HAVING {} ",
            self.group_by,
            fragments.join(" and ")
        ))
    }

    fn params(&self) -> Vec<Value> {
        if !self.has_grouping() {
            return Vec::new();
        }
        self.having.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_renders_nothing() {
        let clause = GroupByHavingClause::new();
        assert_eq!(clause.render().unwrap(), "");
        assert!(clause.params().is_empty());
    }

    #[test]
    fn group_by_without_having() {
        let mut clause = GroupByHavingClause::new();
        clause.set_group_by("dept");
        assert_eq!(clause.render().unwrap(), "GROUP BY dept ");
        assert!(clause.params().is_empty());
    }

    #[test]
    fn group_by_with_having_conditions() {
        let mut clause = GroupByHavingClause::new();
        clause.set_group_by("dept");
        clause.set_having("count(*) >", 5i64);
        clause.set_having("sum(salary) <", 100_000i64);
        assert_eq!(
            clause.render().unwrap(),
            "GROUP BY dept HAVING count(*) > ? and sum(salary) < ? "
        );
        assert_eq!(
            clause.params(),
            vec![Value::Int(5), Value::Int(100_000)]
        );
    }

    #[test]
    fn having_without_grouping_is_inert() {
        let mut clause = GroupByHavingClause::new();
        clause.set_having("count(*) >", 5i64);
        assert_eq!(clause.render().unwrap(), "");
        assert!(clause.params().is_empty());
    }

    #[test]
    fn grouping_switches_staged_having_on() {
        let mut clause = GroupByHavingClause::new();
        clause.set_having("count(*) >", 5i64);
        clause.set_group_by("dept");
        assert_eq!(
            clause.render().unwrap(),
            "GROUP BY dept HAVING count(*) > ? "
        );
        assert_eq!(clause.params(), vec![Value::Int(5)]);
    }

    #[test]
    fn empty_grouping_expression_stays_inert() {
        let mut clause = GroupByHavingClause::new();
        clause.set_group_by("");
        clause.set_having("count(*) >", 1i64);
        assert_eq!(clause.render().unwrap(), "");
        assert!(clause.params().is_empty());
    }
}
