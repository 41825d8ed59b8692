//! Clause components assembled into statements.
//!
//! Each component owns an [`OrderedMap`](crate::ordered::OrderedMap) of its
//! entries and implements [`Clause`]: rendering one SQL fragment and exposing
//! the parameter values behind the fragment's placeholders, in matching
//! order. [`StatementBuilder`](crate::statement::StatementBuilder)
//! concatenates the fragments and the parameter sub-lists in the same fixed
//! order, which is what keeps `?` positions and values aligned end to end.

mod condition;
mod field;
mod group;
mod limit;
mod traits;

pub use condition::ConditionClause;
pub use field::{FieldClause, FieldMode};
pub use group::GroupByHavingClause;
pub use limit::{LimitKind, LimitOffsetClause};
pub use traits::Clause;

#[cfg(test)]
mod tests;
