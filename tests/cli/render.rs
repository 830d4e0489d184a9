//! `sqlify render` end to end

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const STATEMENTS_JSON: &str = r#"[
    { "kind": "use", "type": "use", "db": "shop" },
    {
        "kind": "common_command",
        "type": "drop",
        "keyword": "table",
        "prefix": "if exists",
        "name": { "tables": [{ "table": "orders" }, { "db": "archive", "table": "orders" }] }
    },
    { "kind": "deallocate", "type": "deallocate", "keyword": "prepare", "expr": { "identifier": "p1" } }
]"#;

fn sqlify(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sqlify").unwrap();
    cmd.current_dir(dir.path()).env_remove("SQLIFY_QUOTE_STYLE");
    cmd
}

#[test]
fn test_render_json_file() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("stmts.json"), STATEMENTS_JSON)?;

    sqlify(&dir)
        .args(["render", "stmts.json"])
        .assert()
        .success()
        .stdout("USE shop\nDROP TABLE IF EXISTS orders, archive.orders\nDEALLOCATE PREPARE p1\n");

    Ok(())
}

#[test]
fn test_render_yaml_single_statement() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("unlock.yaml"),
        "kind: lock_unlock\ntype: unlock\nkeyword: tables\n",
    )?;

    sqlify(&dir)
        .args(["render", "unlock.yaml"])
        .assert()
        .success()
        .stdout("UNLOCK TABLES\n");

    Ok(())
}

#[test]
fn test_render_from_stdin_with_quote_flags() -> Result<()> {
    let dir = TempDir::new()?;

    sqlify(&dir)
        .args([
            "render",
            "-",
            "--quote-style",
            "bracket",
            "--quote-policy",
            "always",
        ])
        .write_stdin(r#"{ "kind": "describe", "type": "describe", "table": "orders" }"#)
        .assert()
        .success()
        .stdout("DESCRIBE [orders]\n");

    Ok(())
}

#[test]
fn test_render_uses_config_file() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("sqlify.yaml"),
        "render:\n  quote_style: double\n  quote_policy: always\n",
    )?;

    sqlify(&dir)
        .args(["render", "-"])
        .write_stdin(r#"{ "kind": "use", "type": "use", "db": "shop" }"#)
        .assert()
        .success()
        .stdout("USE \"shop\"\n");

    Ok(())
}

#[test]
fn test_render_writes_output_file() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("stmts.json"), STATEMENTS_JSON)?;

    sqlify(&dir)
        .args(["render", "stmts.json", "--output", "out.sql"])
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(dir.path().join("out.sql"))?;
    assert_eq!(written.lines().count(), 3);
    assert!(written.starts_with("USE shop\n"));

    Ok(())
}

#[test]
fn test_render_missing_input_fails() -> Result<()> {
    let dir = TempDir::new()?;

    sqlify(&dir)
        .args(["render", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.json"));

    Ok(())
}

#[test]
fn test_render_unknown_kind_fails() -> Result<()> {
    let dir = TempDir::new()?;

    sqlify(&dir)
        .args(["render", "-"])
        .write_stdin(r#"{ "kind": "select", "type": "select" }"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse statements"));

    Ok(())
}

#[test]
fn test_render_depth_limit_from_flag() -> Result<()> {
    let dir = TempDir::new()?;
    let nested = r#"{
        "kind": "if",
        "condition": { "variable": { "prefix": "@", "name": "a" } },
        "then": {
            "body": [{
                "kind": "if",
                "condition": { "variable": { "prefix": "@", "name": "b" } },
                "then": { "body": [{ "kind": "use", "type": "use", "db": "x" }], "terminator": ";" }
            }],
            "terminator": ";"
        }
    }"#;

    sqlify(&dir)
        .args(["render", "-", "--max-depth", "1"])
        .write_stdin(nested)
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum depth of 1"));

    sqlify(&dir)
        .args(["render", "-", "--max-depth", "2"])
        .write_stdin(nested)
        .assert()
        .success()
        .stdout("IF @a IF @b USE x;;\n");

    Ok(())
}

#[test]
fn test_unrecognized_keyword_warns_on_stderr() -> Result<()> {
    let dir = TempDir::new()?;

    sqlify(&dir)
        .args(["render", "-"])
        .write_stdin(
            r#"{ "kind": "common_command", "type": "drop", "keyword": "sequence", "name": { "identifier": "s1" } }"#,
        )
        .assert()
        .success()
        .stdout("DROP SEQUENCE\n")
        .stderr(predicate::str::contains("Unrecognized object keyword"));

    Ok(())
}
