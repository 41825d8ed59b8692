//! # sqlexpr
//!
//! An ordered, placeholder-aligned SQL statement builder.
//!
//! ## Features
//!
//! - **Order you can trust**: every clause stores its entries in
//!   insertion-ordered maps, so `?` placeholders and parameter values never
//!   drift apart
//! - **Three statement shapes**: SELECT, UPDATE, and DELETE assembled from
//!   the same clause components
//! - **Driver-agnostic output**: a [`Statement`] is plain SQL text plus owned
//!   [`Value`] parameters; execution stays outside this crate
//! - **Render-time validation**: misconfigurations (offset without limit,
//!   UPDATE with nothing to set) surface as [`ExprError`], never panics
//!
//! ## Usage
//!
//! ```ignore
//! use sqlexpr::StatementBuilder;
//!
//! // SELECT
//! let builder = StatementBuilder::new()
//!     .fields(&["id", "name"])
//!     .cond("age >", 18)
//!     .order_by("created_at DESC")
//!     .limit(10);
//! let stmt = builder.select_statement("users")?;
//! // stmt.sql()    -> "SELECT id,name FROM users WHERE age > ? ORDER BY created_at DESC LIMIT ?"
//! // stmt.params() -> [18, 10]
//!
//! // UPDATE
//! let stmt = StatementBuilder::new()
//!     .set("status", "inactive")
//!     .cond("id =", user_id)
//!     .update_statement("users")?;
//!
//! // DELETE
//! let stmt = StatementBuilder::new()
//!     .cond_in("id", stale_ids)
//!     .delete_statement("users")?;
//! ```

pub mod clause;
pub mod error;
pub mod ordered;
pub mod statement;
pub mod value;

pub use clause::{
    Clause, ConditionClause, FieldClause, FieldMode, GroupByHavingClause, LimitKind,
    LimitOffsetClause,
};
pub use error::{ExprError, ExprResult};
pub use ordered::OrderedMap;
pub use statement::{Statement, StatementBuilder};
pub use value::Value;
