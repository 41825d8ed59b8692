//! Example demonstrating sqlexpr's statement builder.
//!
//! Run with:
//!   cargo run --example statements -p sqlexpr

use sqlexpr::{ExprResult, Statement, StatementBuilder};

fn print_statement(label: &str, stmt: &Statement) {
    println!("{label}:");
    println!("  sql:    {}", stmt.sql());
    println!("  params: {:?}", stmt.params());
}

fn main() -> ExprResult<()> {
    // SELECT with filters, grouping, ordering, and pagination.
    let select = StatementBuilder::new()
        .fields(&["dept", "count(*) AS headcount"])
        .cond("age >", 18i64)
        .cond_in("status", vec!["active", "pending"])
        .group_by("dept")
        .having("count(*) >", 5i64)
        .order_by("headcount DESC")
        .paginate(2, 20)
        .select_statement("users")?;
    print_statement("SELECT", &select);

    // UPDATE with optional inputs; None simply drops the assignment.
    let email: Option<&str> = None;
    let update = StatementBuilder::new()
        .set("status", "archived")
        .set_opt("email", email)
        .cond("last_login <", "2024-01-01")
        .update_statement("users")?;
    print_statement("UPDATE", &update);

    // DELETE keyed by an IN-list.
    let delete = StatementBuilder::new()
        .cond_in("id", vec![10i64, 11, 12])
        .delete_statement("sessions")?;
    print_statement("DELETE", &delete);

    Ok(())
}
