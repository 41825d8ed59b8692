//! Integration tests for the clause module.
//!
//! These drive every component through the [`Clause`] trait and check the
//! placeholder/parameter alignment invariant generically.

use crate::clause::{
    Clause, ConditionClause, FieldClause, GroupByHavingClause, LimitKind, LimitOffsetClause,
};
use crate::value::Value;

fn placeholder_count(sql: &str) -> usize {
    sql.chars().filter(|c| *c == '?').count()
}

fn assert_aligned(clause: &dyn Clause) {
    let sql = clause.render().unwrap();
    assert_eq!(
        placeholder_count(&sql),
        clause.param_count(),
        "placeholders and params diverged in {sql:?}"
    );
}

#[test]
fn test_all_components_stay_aligned() {
    let mut condition = ConditionClause::new();
    condition.set("age >", 18i64);
    condition.set_in("id", vec![1i64, 2, 3]);

    let mut field = FieldClause::new();
    field.set("name", "bob");
    field.mark_for_update();

    let mut limit = LimitOffsetClause::new();
    limit.set(LimitKind::Limit, 10);
    limit.set(LimitKind::Offset, 5);

    let mut group = GroupByHavingClause::new();
    group.set_group_by("dept");
    group.set_having("count(*) >", 2i64);

    let clauses: Vec<&dyn Clause> = vec![&condition, &field, &limit, &group];
    for clause in clauses {
        assert_aligned(clause);
    }
}

#[test]
fn test_inert_components_stay_aligned() {
    let condition = ConditionClause::new();
    let field = FieldClause::new();
    let limit = LimitOffsetClause::new();

    // staged HAVING with no grouping renders nothing and binds nothing
    let mut group = GroupByHavingClause::new();
    group.set_having("count(*) >", 2i64);

    let clauses: Vec<&dyn Clause> = vec![&condition, &field, &limit, &group];
    for clause in clauses {
        assert_aligned(clause);
    }
}

#[test]
fn test_render_does_not_mutate() {
    let mut condition = ConditionClause::new();
    condition.set("age >", 18i64);
    condition.set_not_in("status", vec!["x", "y"]);

    let first_sql = condition.render().unwrap();
    let first_params = condition.params();
    let second_sql = condition.render().unwrap();
    let second_params = condition.params();

    assert_eq!(first_sql, second_sql);
    assert_eq!(first_params, second_params);
}

#[test]
fn test_in_list_values_flatten_in_order() {
    let mut condition = ConditionClause::new();
    condition.set("a =", 1i64);
    condition.set_in("b", vec![2i64, 3]);
    condition.set("c =", 4i64);

    assert_eq!(
        condition.params(),
        vec![
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
            Value::Int(4)
        ]
    );
}
