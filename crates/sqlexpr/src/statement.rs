//! Statement assembly from clause components.

use crate::clause::{
    Clause, ConditionClause, FieldClause, GroupByHavingClause, LimitKind, LimitOffsetClause,
};
use crate::error::ExprResult;
use crate::value::Value;

/// A built statement: SQL text plus its bound parameter values.
///
/// The `?` placeholders in [`sql`](Statement::sql) and the entries of
/// [`params`](Statement::params) always match in count and order; this pair
/// is the whole contract handed to whatever executes the statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<Value>,
}

impl Statement {
    /// The SQL text with `?` placeholders.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Parameter values in placeholder order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Split into the (text, parameters) pair.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }
}

/// Fluent builder producing SELECT, UPDATE, and DELETE statements.
///
/// Setters never fail; invalid combinations surface when a terminal render
/// is called. Rendering only reads the accumulated state, so an unmutated
/// builder renders the same statement every time.
///
/// ```ignore
/// use sqlexpr::StatementBuilder;
///
/// let builder = StatementBuilder::new()
///     .fields(&["id", "name"])
///     .cond("age >", 18)
///     .order_by("created_at DESC")
///     .limit(10);
///
/// let sql = builder.build_select("users")?;
/// let params = builder.params();
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatementBuilder {
    field: FieldClause,
    condition: ConditionClause,
    group_having: GroupByHavingClause,
    limit_offset: LimitOffsetClause,
    order_by: String,
}

impl StatementBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Fields / assignments ====================

    /// Add a SELECT column.
    pub fn field(mut self, column: &str) -> Self {
        self.field.select(column);
        self
    }

    /// Add multiple SELECT columns.
    pub fn fields(mut self, columns: &[&str]) -> Self {
        for column in columns {
            self.field.select(column);
        }
        self
    }

    /// Add an assignment column for UPDATE.
    ///
    /// Also switches the field clause into assignment mode, so the assigned
    /// values surface from [`params`](Self::params).
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.field.set(column, value);
        self.field.mark_for_update();
        self
    }

    /// Add an assignment column only when a value is present.
    pub fn set_opt<T: Into<Value>>(self, column: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.set(column, v),
            None => self,
        }
    }

    /// Serialize a value to JSON and assign it to a column.
    ///
    /// The only fallible setter, and only through serialization itself.
    pub fn set_json<T: serde::Serialize>(
        self,
        column: &str,
        value: &T,
    ) -> serde_json::Result<Self> {
        let json_val = serde_json::to_value(value)?;
        Ok(self.set(column, json_val))
    }

    /// Switch the field clause into assignment mode explicitly.
    ///
    /// [`set`](Self::set) already does this; the explicit form turns columns
    /// added via [`field`](Self::field) into assignment targets.
    pub fn mark_for_update(mut self) -> Self {
        self.field.mark_for_update();
        self
    }

    // ==================== Conditions ====================

    /// Add a scalar WHERE condition; the fragment base carries column and
    /// operator (`"age >"`, `"name ="`).
    pub fn cond(mut self, fragment_base: &str, value: impl Into<Value>) -> Self {
        self.condition.set(fragment_base, value);
        self
    }

    /// Add a scalar WHERE condition only when a value is present.
    pub fn cond_opt<T: Into<Value>>(self, fragment_base: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.cond(fragment_base, v),
            None => self,
        }
    }

    /// Add a WHERE `IN` condition over a list of values.
    pub fn cond_in<T: Into<Value>>(mut self, fragment_base: &str, values: Vec<T>) -> Self {
        self.condition.set_in(fragment_base, values);
        self
    }

    /// Add a WHERE `NOT IN` condition over a list of values.
    pub fn cond_not_in<T: Into<Value>>(mut self, fragment_base: &str, values: Vec<T>) -> Self {
        self.condition.set_not_in(fragment_base, values);
        self
    }

    // ==================== Row window ====================

    /// Set LIMIT.
    pub fn limit(mut self, rows: i64) -> Self {
        self.limit_offset.set(LimitKind::Limit, rows);
        self
    }

    /// Set OFFSET. Only valid together with a limit; rendering rejects an
    /// offset on its own.
    pub fn offset(mut self, rows: i64) -> Self {
        self.limit_offset.set(LimitKind::Offset, rows);
        self
    }

    /// Set LIMIT/OFFSET from a 1-based page number and page size.
    pub fn paginate(mut self, page: i64, per_page: i64) -> Self {
        let p = page.max(1);
        let size = per_page.max(1);
        self.limit_offset.set(LimitKind::Limit, size);
        self.limit_offset.set(LimitKind::Offset, (p - 1) * size);
        self
    }

    // ==================== Ordering / grouping ====================

    /// Set the ORDER BY expression (overwrites). Passed through verbatim
    /// after the keywords: `order_by("created_at DESC")`.
    pub fn order_by(mut self, expr: &str) -> Self {
        self.order_by = expr.to_string();
        self
    }

    /// Set the GROUP BY expression (overwrites).
    pub fn group_by(mut self, expr: &str) -> Self {
        self.group_having.set_group_by(expr);
        self
    }

    /// Add a HAVING condition. Inert until a grouping expression is set.
    pub fn having(mut self, fragment_base: &str, value: impl Into<Value>) -> Self {
        self.group_having.set_having(fragment_base, value);
        self
    }

    // ==================== Terminal renders ====================

    /// Build the SELECT statement text for a table.
    pub fn build_select(&self, table: &str) -> ExprResult<String> {
        let sql = format!(
            "SELECT {} FROM {} {} {} {} {}",
            self.field.render_selection()?,
            table,
            self.condition.render()?,
            self.group_having.render()?,
            self.render_order_by(),
            self.limit_offset.render()?,
        );
        let sql = normalize_spaces(&sql);
        self.trace_built("SELECT", table, &sql);
        Ok(sql)
    }

    /// Build the UPDATE statement text for a table.
    pub fn build_update(&self, table: &str) -> ExprResult<String> {
        let sql = format!(
            "UPDATE {} {} {} {} {} {}",
            table,
            self.field.render_assignment()?,
            self.condition.render()?,
            self.group_having.render()?,
            self.render_order_by(),
            self.limit_offset.render()?,
        );
        let sql = normalize_spaces(&sql);
        self.trace_built("UPDATE", table, &sql);
        Ok(sql)
    }

    /// Build the DELETE statement text for a table. The field clause
    /// contributes nothing here.
    pub fn build_delete(&self, table: &str) -> ExprResult<String> {
        let sql = format!(
            "DELETE FROM {} {} {} {} {}",
            table,
            self.condition.render()?,
            self.group_having.render()?,
            self.render_order_by(),
            self.limit_offset.render()?,
        );
        let sql = normalize_spaces(&sql);
        self.trace_built("DELETE", table, &sql);
        Ok(sql)
    }

    /// The flattened parameter list, in the fixed clause order the terminal
    /// renders use: fields, conditions, group/having, limit/offset.
    pub fn params(&self) -> Vec<Value> {
        let mut params = self.field.params();
        params.extend(self.condition.params());
        params.extend(self.group_having.params());
        params.extend(self.limit_offset.params());
        params
    }

    // ==================== Statement pairing ====================

    /// Build the SELECT text together with its parameters.
    pub fn select_statement(&self, table: &str) -> ExprResult<Statement> {
        Ok(Statement {
            sql: self.build_select(table)?,
            params: self.params(),
        })
    }

    /// Build the UPDATE text together with its parameters.
    pub fn update_statement(&self, table: &str) -> ExprResult<Statement> {
        Ok(Statement {
            sql: self.build_update(table)?,
            params: self.params(),
        })
    }

    /// Build the DELETE text together with its parameters.
    pub fn delete_statement(&self, table: &str) -> ExprResult<Statement> {
        Ok(Statement {
            sql: self.build_delete(table)?,
            params: self.params(),
        })
    }

    fn render_order_by(&self) -> String {
        if self.order_by.is_empty() {
            String::new()
        } else {
            format!("ORDER BY {}", self.order_by)
        }
    }

    #[cfg(feature = "tracing")]
    fn trace_built(&self, shape: &str, table: &str, sql: &str) {
        tracing::debug!(
            target: "sqlexpr.sql",
            shape,
            table,
            param_count = self.params().len(),
            sql = %sql,
        );
    }

    #[cfg(not(feature = "tracing"))]
    fn trace_built(&self, _shape: &str, _table: &str, _sql: &str) {}
}

/// Collapse runs of two or more spaces to one and trim trailing spaces.
///
/// Fragments are concatenated with single separating spaces whether or not
/// they are empty, so the assembled text can carry interior runs; this is
/// the only post-processing applied to it.
fn normalize_spaces(sql: &str) -> String {
    let mut result = String::with_capacity(sql.len());
    let mut chars = sql.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ' ' {
            while chars.peek() == Some(&' ') {
                chars.next();
            }
        }
        result.push(ch);
    }

    while result.ends_with(' ') {
        result.pop();
    }
    result
}
