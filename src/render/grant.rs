//! SQL rendering for GRANT statements
//!
//! Two grant shapes are supported:
//! - privilege grants: `GRANT SELECT (a, b), INSERT ON TABLE db.* TO 'u'@'%'`
//! - proxy grants: `GRANT PROXY ON 'admin'@'localhost' TO 'u'@'%'`
//!
//! When the `ON` target is unrecognized the clause is rendered as a bare `ON`.

use itertools::Itertools;
use tracing::warn;

use crate::ast::{Grant, GrantTarget, PrivilegeLevel, PrivilegeObject, UserOrRole};
use crate::config::RenderSettings;
use crate::render::sql::{quote_qualified, render_column_ref, render_expr, render_literal};
use crate::render::{RenderContext, join_non_empty, to_upper};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GrantKind {
    Privilege,
    Proxy,
}

impl GrantKind {
    fn parse(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "priv" => Some(GrantKind::Privilege),
            "proxy" => Some(GrantKind::Proxy),
            _ => None,
        }
    }
}

/// `<ACTION> <privileges> [ON <target>] TO <grantees> [WITH ...]`
pub fn render_grant(stmt: &Grant, ctx: &RenderContext) -> String {
    let settings = ctx.settings();
    let privileges = stmt
        .objects
        .iter()
        .map(|object| render_privilege(object, settings))
        .join(", ");

    let mut clauses = vec![to_upper(&stmt.action), privileges];

    if let Some(ref on) = stmt.on {
        clauses.push("ON".to_string());
        clauses.push(render_grant_target(&stmt.keyword, on, settings));
    }

    clauses.push("TO".to_string());
    clauses.push(stmt.to.iter().map(render_user_or_role).join(", "));

    if let Some(ref with) = stmt.with {
        clauses.push(render_expr(with, settings));
    }

    join_non_empty(clauses, " ")
}

/// `<privilege>[ (<col>, ...)]`
fn render_privilege(object: &PrivilegeObject, settings: &RenderSettings) -> String {
    let privilege = render_expr(&object.privilege, settings);
    match object.columns {
        Some(ref columns) => format!(
            "{} ({})",
            privilege,
            columns
                .iter()
                .map(|column| render_column_ref(column, settings))
                .join(", ")
        ),
        None => privilege,
    }
}

fn render_grant_target(keyword: &str, target: &GrantTarget, settings: &RenderSettings) -> String {
    match (GrantKind::parse(keyword), target) {
        (
            Some(GrantKind::Privilege),
            GrantTarget::Privilege {
                object_type,
                priv_level,
            },
        ) => join_non_empty(
            [
                render_literal(object_type),
                priv_level
                    .iter()
                    .map(|level| render_privilege_level(level, settings))
                    .join(", "),
            ],
            " ",
        ),
        (Some(GrantKind::Proxy), GrantTarget::Proxy(user)) => render_user_or_role(user),
        (kind, _) => {
            warn!(
                keyword = %keyword,
                ?kind,
                "Grant target does not match the grant keyword, rendering a bare ON clause"
            );
            String::new()
        }
    }
}

/// `[prefix.]name`
fn render_privilege_level(level: &PrivilegeLevel, settings: &RenderSettings) -> String {
    quote_qualified([level.prefix.as_ref(), Some(&level.name)], settings)
}

/// `'name'[@'host']`
fn render_user_or_role(user: &UserOrRole) -> String {
    match user.host {
        Some(ref host) => format!("{}@{}", render_literal(&user.name), render_literal(host)),
        None => render_literal(&user.name),
    }
}
