//! SQL rendering for DDL action commands (CREATE/DROP/ALTER/TRUNCATE ...)
//!
//! The object keyword decides how the target is rendered:
//! - `table`: comma-joined table references
//! - `trigger`: `[schema.]trigger`
//! - `database`, `schema`, `procedure`: a single identifier
//! - `view`: table references followed by option clauses
//! - `index`: index name, `ON <table>` when known, then option clauses
//!
//! An unrecognized keyword, or a target whose shape does not fit the keyword,
//! renders without a target. The action and keyword are still emitted.

use itertools::Itertools;
use tracing::warn;

use crate::ast::{CommandTarget, CommonCommand, Expr, TriggerName};
use crate::config::RenderSettings;
use crate::render::sql::{
    quote_ident, quote_qualified, render_column_ref, render_expr, render_table, render_tables,
};
use crate::render::{RenderContext, join_non_empty, opt_upper, to_upper};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectKind {
    Table,
    Trigger,
    Database,
    Schema,
    Procedure,
    View,
    Index,
}

impl ObjectKind {
    fn parse(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "table" => Some(ObjectKind::Table),
            "trigger" => Some(ObjectKind::Trigger),
            "database" => Some(ObjectKind::Database),
            "schema" => Some(ObjectKind::Schema),
            "procedure" => Some(ObjectKind::Procedure),
            "view" => Some(ObjectKind::View),
            "index" => Some(ObjectKind::Index),
            _ => None,
        }
    }
}

/// `<ACTION> <OBJECT> [PREFIX] <target>`
pub fn render_common_command(stmt: &CommonCommand, ctx: &RenderContext) -> String {
    let target = match ObjectKind::parse(&stmt.keyword) {
        Some(kind) => render_target(kind, stmt, ctx.settings()),
        None => {
            warn!(
                keyword = %stmt.keyword,
                "Unrecognized object keyword, rendering command without a target"
            );
            String::new()
        }
    };

    join_non_empty(
        [
            to_upper(&stmt.action),
            to_upper(&stmt.keyword),
            opt_upper(stmt.prefix.as_deref()),
            target,
        ],
        " ",
    )
}

fn render_target(kind: ObjectKind, stmt: &CommonCommand, settings: &RenderSettings) -> String {
    match (kind, &stmt.name) {
        (ObjectKind::Table, CommandTarget::Tables(tables)) => render_tables(tables, settings),
        (ObjectKind::Trigger, CommandTarget::Trigger(trigger)) => {
            render_trigger_name(trigger, settings)
        }
        (
            ObjectKind::Database | ObjectKind::Schema | ObjectKind::Procedure,
            CommandTarget::Identifier(name),
        ) => quote_ident(name, settings),
        (ObjectKind::View, CommandTarget::Tables(views)) => join_non_empty(
            [
                render_tables(views, settings),
                render_options(&stmt.options, settings),
            ],
            " ",
        ),
        (ObjectKind::Index, CommandTarget::Index(name)) => {
            let on_clause = stmt
                .table
                .as_ref()
                .map(|table| format!("ON {}", render_table(table, settings)))
                .unwrap_or_default();
            join_non_empty(
                [
                    render_column_ref(name, settings),
                    on_clause,
                    render_options(&stmt.options, settings),
                ],
                " ",
            )
        }
        (kind, other) => {
            warn!(
                ?kind,
                found = ?other,
                "Command target does not match its object keyword, rendering without a target"
            );
            String::new()
        }
    }
}

fn render_trigger_name(trigger: &TriggerName, settings: &RenderSettings) -> String {
    quote_qualified([trigger.schema.as_ref(), Some(&trigger.trigger)], settings)
}

fn render_options(options: &[Expr], settings: &RenderSettings) -> String {
    join_non_empty(
        options.iter().map(|option| render_expr(option, settings)).collect_vec(),
        " ",
    )
}
