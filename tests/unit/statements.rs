//! End-to-end rendering of each statement kind through the public API

use anyhow::Result;
use insta::assert_snapshot;
use sqlify::ast::*;
use sqlify::config::{QuotePolicy, QuoteStyle, RenderSettings};
use sqlify::{RenderContext, SqlRenderer, program_to_sql, to_sql};

#[test]
fn test_documented_examples() -> Result<()> {
    let create: Statement = CommonCommand::new(
        "create",
        "table",
        CommandTarget::Tables(vec![TableRef::new("t1")]),
    )
    .into();
    assert_eq!(to_sql(&create)?, "CREATE TABLE t1");

    let use_db: Statement = Use {
        action: "use".to_string(),
        db: Ident::new("mydb"),
    }
    .into();
    assert_eq!(to_sql(&use_db)?, "USE mydb");

    let deallocate: Statement = Deallocate {
        action: "deallocate".to_string(),
        keyword: Some("prepare".to_string()),
        expr: Expr::ident("p1"),
    }
    .into();
    assert_eq!(to_sql(&deallocate)?, "DEALLOCATE PREPARE p1");

    let unlock: Statement = LockUnlock {
        action: "unlock".to_string(),
        keyword: Some("tables".to_string()),
        tables: vec![],
        lock_mode: None,
        nowait: None,
    }
    .into();
    assert_eq!(to_sql(&unlock)?, "UNLOCK TABLES");

    Ok(())
}

#[test]
fn test_render_from_json_document() -> Result<()> {
    let stmt: Statement = serde_json::from_str(
        r#"{
            "kind": "grant",
            "type": "grant",
            "keyword": "priv",
            "objects": [
                { "priv": { "keyword": "select" }, "columns": [{ "column": "a" }, { "column": "b" }] },
                { "priv": { "keyword": "insert" } }
            ],
            "on": {
                "object_type": { "type": "origin", "value": "table" },
                "priv_level": [{ "prefix": "mydb", "name": "*" }]
            },
            "to": [{
                "name": { "type": "single_quote_string", "value": "u1" },
                "host": { "type": "single_quote_string", "value": "localhost" }
            }],
            "with": { "literal": { "type": "origin", "value": "with grant option" } }
        }"#,
    )?;

    assert_snapshot!(
        to_sql(&stmt)?,
        @"GRANT SELECT (a, b), INSERT ON TABLE mydb.* TO 'u1'@'localhost' WITH GRANT OPTION"
    );
    Ok(())
}

#[test]
fn test_render_proxy_grant_from_json() -> Result<()> {
    let stmt: Statement = serde_json::from_str(
        r#"{
            "kind": "grant",
            "type": "grant",
            "keyword": "proxy",
            "objects": [{ "priv": { "keyword": "proxy" } }],
            "on": {
                "name": { "type": "single_quote_string", "value": "root" },
                "host": { "type": "single_quote_string", "value": "%" }
            },
            "to": [{ "name": { "type": "single_quote_string", "value": "admin" } }]
        }"#,
    )?;

    assert_snapshot!(to_sql(&stmt)?, @"GRANT PROXY ON 'root'@'%' TO 'admin'");
    Ok(())
}

#[test]
fn test_render_if_program() -> Result<()> {
    let stmt: Statement = serde_json::from_str(
        r#"{
            "kind": "if",
            "condition": {
                "binary": {
                    "op": ">",
                    "left": { "variable": { "prefix": "@", "name": "n" } },
                    "right": { "literal": { "type": "number", "value": 10 } }
                }
            },
            "then": {
                "body": [
                    { "kind": "call", "expr": { "function": { "name": ["audit", "log_big"], "args": [{ "variable": { "prefix": "@", "name": "n" } }] } } },
                    { "kind": "set_variable", "expr": { "binary": { "op": "=", "left": { "variable": { "prefix": "@", "name": "n" } }, "right": { "literal": { "type": "number", "value": 0 } } } } }
                ],
                "terminator": ";"
            },
            "else": {
                "body": [{ "kind": "describe", "type": "desc", "table": "orders" }],
                "terminator": ";"
            }
        }"#,
    )?;

    assert_snapshot!(
        to_sql(&stmt)?,
        @"IF @n > 10 CALL audit.log_big(@n) ; SET @n = 0; ELSE DESC orders;"
    );
    Ok(())
}

#[test]
fn test_render_declare_from_yaml() -> Result<()> {
    let stmt: Statement = serde_yaml::from_str(
        r#"
kind: declare
type: declare
declare:
  - at: "@"
    name: total
    keyword: variable
    data_type: { name: decimal, length: 10, scale: 2 }
    default: { literal: { type: number, value: 0 } }
  - at: "@"
    name: c
    keyword: cursor
    prefix: cursor
"#,
    )?;

    assert_snapshot!(to_sql(&stmt)?, @"DECLARE @total DECIMAL(10, 2) = 0, @c CURSOR");
    Ok(())
}

#[test]
fn test_render_rename_and_lock() -> Result<()> {
    let rename: Statement = Rename {
        action: "rename".to_string(),
        table: vec![
            vec![TableRef::new("a"), TableRef::new("b")],
            vec![TableRef::new("c").with_db("old"), TableRef::new("c").with_db("new")],
        ],
    }
    .into();
    assert_snapshot!(to_sql(&rename)?, @"RENAME TABLE a TO b, old.c TO new.c");

    let lock: Statement = LockUnlock {
        action: "lock".to_string(),
        keyword: Some("tables".to_string()),
        tables: vec![LockTable {
            table: TableRef::new("orders").with_alias("o"),
            lock_type: Some(LockType {
                prefix: None,
                lock: Some("read".to_string()),
                suffix: Some("local".to_string()),
            }),
        }],
        lock_mode: None,
        nowait: None,
    }
    .into();
    assert_snapshot!(to_sql(&lock)?, @"LOCK TABLES orders AS o READ LOCAL");

    Ok(())
}

#[test]
fn test_program_uses_default_separator() -> Result<()> {
    let statements: Vec<Statement> = vec![
        Use {
            action: "use".to_string(),
            db: Ident::new("shop"),
        }
        .into(),
        Call {
            expr: Expr::call("refresh", vec![Expr::string("daily")]),
        }
        .into(),
    ];
    assert_eq!(program_to_sql(&statements)?, "USE shop ; CALL refresh('daily')");
    Ok(())
}

#[test]
fn test_quote_settings_apply_to_every_identifier() -> Result<()> {
    let settings = RenderSettings {
        quote_style: QuoteStyle::Double,
        quote_policy: QuotePolicy::Always,
        ..Default::default()
    };
    let ctx = RenderContext::new(&settings);

    let drop: Statement = CommonCommand::new(
        "drop",
        "table",
        CommandTarget::Tables(vec![TableRef::new("users").with_schema("public")]),
    )
    .with_prefix("if exists")
    .into();
    assert_eq!(
        drop.to_sql(&ctx)?,
        r#"DROP TABLE IF EXISTS "public"."users""#
    );

    let describe: Statement = Describe {
        action: "describe".to_string(),
        table: Ident::new("order items"),
    }
    .into();
    assert_eq!(to_sql(&describe)?, "DESCRIBE `order items`");

    Ok(())
}
