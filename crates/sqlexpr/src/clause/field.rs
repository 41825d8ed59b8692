//! Column list / SET assignment clause.

use crate::clause::traits::Clause;
use crate::error::{ExprError, ExprResult};
use crate::ordered::OrderedMap;
use crate::value::Value;

/// Rendering mode for the field clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldMode {
    /// Column list for SELECT; stored values stay unused
    #[default]
    Selection,
    /// `SET col = ?` list for UPDATE; stored values become parameters
    Assignment,
}

/// Field clause component: SELECT columns or UPDATE assignments.
///
/// One ordered store serves both statement shapes. The mode decides which
/// fragment [`render`](Clause::render) produces and whether stored values
/// surface as parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldClause {
    fields: OrderedMap<Value>,
    mode: FieldMode,
}

impl FieldClause {
    /// Create an empty field clause in selection mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column with its assignment value.
    pub fn set(&mut self, column: &str, value: impl Into<Value>) {
        self.fields.set(column, value.into());
    }

    /// Add a column for selection only; the value slot stays unused.
    pub fn select(&mut self, column: &str) {
        self.fields.set(column, Value::Null);
    }

    /// Switch to assignment mode.
    pub fn mark_for_update(&mut self) {
        self.mode = FieldMode::Assignment;
    }

    /// Current rendering mode.
    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    /// Render the SELECT column list; `*` when no column was added.
    ///
    /// Column names pass through verbatim, so expressions and aliases
    /// (`"count(*) AS n"`) work unmodified.
    pub fn render_selection(&self) -> ExprResult<String> {
        if self.fields.is_empty() {
            return Ok("*".to_string());
        }
        let cols: Vec<&str> = self.fields.keys().collect();
        Ok(cols.join(","))
    }

    /// Render the UPDATE assignment list.
    ///
    /// Fails with [`ExprError::MissingAssignmentTarget`] when no column was
    /// added; an UPDATE with an empty SET list is not valid SQL.
    pub fn render_assignment(&self) -> ExprResult<String> {
        if self.fields.is_empty() {
            return Err(ExprError::MissingAssignmentTarget);
        }
        let assigns: Vec<String> = self
            .fields
            .keys()
            .map(|col| format!("{col} = ?"))
            .collect();
        Ok(format!("SET {}", assigns.join(",")))
    }

    /// Check whether any column has been added.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Clause for FieldClause {
    fn render(&self) -> ExprResult<String> {
        match self.mode {
            FieldMode::Selection => self.render_selection(),
            FieldMode::Assignment => self.render_assignment(),
        }
    }

    fn params(&self) -> Vec<Value> {
        match self.mode {
            FieldMode::Selection => Vec::new(),
            FieldMode::Assignment => self.fields.values().cloned().collect(),
        }
    }
}
