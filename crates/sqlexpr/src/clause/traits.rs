//! Trait definitions for clause components.

use crate::error::ExprResult;
use crate::value::Value;

/// Base trait implemented by every clause component.
///
/// A clause renders one SQL fragment and exposes the parameter values behind
/// the fragment's `?` placeholders, in placeholder order. An inapplicable
/// clause renders the empty string; errors are reserved for states that can
/// never produce a valid fragment.
pub trait Clause {
    /// Render the SQL fragment for this clause.
    fn render(&self) -> ExprResult<String>;

    /// Parameter values in the order their placeholders appear.
    fn params(&self) -> Vec<Value>;

    /// Number of parameters this clause contributes.
    fn param_count(&self) -> usize {
        self.params().len()
    }
}
