//! Structural guarantees that hold across inputs

use anyhow::Result;
use rstest::rstest;
use sqlify::ast::*;
use sqlify::config::RenderSettings;
use sqlify::{RenderContext, render_program, to_sql};

fn set(name: &str, value: i64) -> Statement {
    SetVariable {
        expr: Expr::binary("=", Expr::var(name), Expr::number(value)),
    }
    .into()
}

#[rstest]
#[case::function(Expr::call("refresh_stats", vec![]))]
#[case::qualified_function(Expr::Function(FunctionCall {
    name: vec![Ident::new("reporting"), Ident::new("rebuild")],
    args: vec![Expr::number(7), Expr::string("full")],
}))]
#[case::variable_argument(Expr::call("bump", vec![Expr::var("counter")]))]
fn test_call_is_call_prefix_plus_expression(#[case] expr: Expr) -> Result<()> {
    let settings = RenderSettings::default();
    let rendered_expr = sqlify::render::sql::render_expr(&expr, &settings);
    let sql = to_sql(&Call { expr }.into())?;
    assert_eq!(sql, format!("CALL {}", rendered_expr));
    Ok(())
}

#[rstest]
#[case::lower("drop", "table")]
#[case::upper("DROP", "TABLE")]
#[case::mixed("Drop", "TaBlE")]
fn test_table_command_ignores_input_casing(
    #[case] action: &str,
    #[case] keyword: &str,
) -> Result<()> {
    let stmt: Statement = CommonCommand::new(
        action,
        keyword,
        CommandTarget::Tables(vec![TableRef::new("t1"), TableRef::new("t2")]),
    )
    .into();
    let sql = to_sql(&stmt)?;
    assert!(sql.starts_with("DROP TABLE"));
    assert_eq!(sql, "DROP TABLE t1, t2");
    Ok(())
}

#[rstest]
#[case::one_pair(1, 2)]
#[case::three_pairs(3, 2)]
#[case::chained(2, 4)]
fn test_rename_separators(#[case] groups: usize, #[case] group_size: usize) -> Result<()> {
    let table: Vec<Vec<TableRef>> = (0..groups)
        .map(|g| {
            (0..group_size)
                .map(|i| TableRef::new(format!("t{}_{}", g, i)))
                .collect::<Vec<_>>()
        })
        .collect();
    let sql = to_sql(
        &Rename {
            action: "rename".to_string(),
            table,
        }
        .into(),
    )?;

    assert_eq!(sql.matches(", ").count(), groups - 1);
    assert_eq!(sql.matches(" TO ").count(), groups * (group_size - 1));
    for group in sql.trim_start_matches("RENAME TABLE ").split(", ") {
        assert_eq!(group.matches(" TO ").count(), group_size - 1);
    }
    Ok(())
}

#[rstest]
#[case::no_tables(vec![])]
#[case::with_tables(vec![
    LockTable { table: TableRef::new("a"), lock_type: None },
    LockTable {
        table: TableRef::new("b"),
        lock_type: Some(LockType {
            lock: Some("write".to_string()),
            ..Default::default()
        }),
    },
])]
fn test_unlock_depends_only_on_action_and_keyword(#[case] tables: Vec<LockTable>) -> Result<()> {
    let stmt = LockUnlock {
        action: "Unlock".to_string(),
        keyword: Some("tables".to_string()),
        tables,
        lock_mode: Some(LockMode {
            mode: "in share mode".to_string(),
        }),
        nowait: Some("nowait".to_string()),
    };
    assert_eq!(to_sql(&stmt.into())?, "UNLOCK TABLES");
    Ok(())
}

#[rstest]
#[case::without_default(None, 0)]
#[case::with_default(Some(Expr::number(5)), 1)]
#[case::with_expression_default(Some(Expr::call("now", vec![])), 1)]
fn test_declare_default_assignment(
    #[case] default: Option<Expr>,
    #[case] expected_assignments: usize,
) -> Result<()> {
    let stmt = Declare {
        action: "declare".to_string(),
        declare: vec![Declaration::variable("v", DataType::new("int"), default)],
    };
    let sql = to_sql(&stmt.into())?;
    assert_eq!(sql.matches('=').count(), expected_assignments);
    Ok(())
}

#[rstest]
#[case::without_else(false, 0)]
#[case::with_else(true, 1)]
fn test_if_else_count(#[case] has_else: bool, #[case] expected: usize) -> Result<()> {
    let stmt = IfStatement {
        condition: Expr::binary("<", Expr::var("x"), Expr::number(3)),
        then_branch: Branch::new(vec![set("x", 3)]),
        go: None,
        else_branch: has_else.then(|| Branch::new(vec![set("x", 0)])),
    };
    let sql = to_sql(&stmt.into())?;
    assert_eq!(sql.matches("ELSE").count(), expected);
    Ok(())
}

#[rstest]
#[case::create_database("create", "database", CommandTarget::Identifier(Ident::new("shop")))]
#[case::drop_trigger(
    "drop",
    "trigger",
    CommandTarget::Trigger(TriggerName {
        schema: Some(Ident::new("app")),
        trigger: Ident::new("audit_ins"),
    })
)]
#[case::drop_index("drop", "index", CommandTarget::Index(ColumnRef::new("idx_email")))]
fn test_recasing_keywords_is_idempotent(
    #[case] action: &str,
    #[case] keyword: &str,
    #[case] target: CommandTarget,
) -> Result<()> {
    let lower: Statement = CommonCommand::new(action, keyword, target.clone()).into();
    let upper: Statement =
        CommonCommand::new(action.to_uppercase(), keyword.to_uppercase(), target).into();
    assert_eq!(to_sql(&lower)?, to_sql(&upper)?);
    Ok(())
}

#[rstest]
#[case::at_limit(3, true)]
#[case::past_limit(4, false)]
fn test_if_nesting_is_bounded(#[case] levels: usize, #[case] renders: bool) {
    let settings = RenderSettings {
        max_depth: 3,
        ..Default::default()
    };

    let mut stmt = set("x", 1);
    for _ in 0..levels {
        stmt = IfStatement {
            condition: Expr::var("flag"),
            then_branch: Branch::new(vec![stmt]),
            go: None,
            else_branch: None,
        }
        .into();
    }

    let result = render_program(&[stmt], &RenderContext::new(&settings));
    assert_eq!(result.is_ok(), renders);
}
