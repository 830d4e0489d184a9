//! Identifier quoting

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::ast::Ident;
use crate::config::{QuotePolicy, RenderSettings};

/// Words that cannot appear bare as identifiers in the dialects we emit
static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ADD", "ALL", "ALTER", "AND", "AS", "ASC", "BETWEEN", "BY", "CALL", "CASE", "CHECK",
        "COLUMN", "CONSTRAINT", "CREATE", "CROSS", "CURSOR", "DATABASE", "DECLARE", "DEFAULT",
        "DELETE", "DESC", "DESCRIBE", "DISTINCT", "DROP", "ELSE", "END", "EXISTS", "FOR",
        "FOREIGN", "FROM", "GRANT", "GROUP", "HAVING", "IF", "IN", "INDEX", "INNER", "INSERT",
        "INTO", "IS", "JOIN", "KEY", "LEFT", "LIKE", "LIMIT", "LOCK", "NOT", "NULL", "ON", "OR",
        "ORDER", "PRIMARY", "PROCEDURE", "REFERENCES", "RENAME", "REVOKE", "RIGHT", "SCHEMA",
        "SELECT", "SET", "TABLE", "THEN", "TO", "TRIGGER", "UNION", "UNIQUE", "UNLOCK", "UPDATE",
        "USE", "USER", "USING", "VALUES", "VIEW", "WHEN", "WHERE", "WITH",
    ]
    .into_iter()
    .collect()
});

/// Returns true if the name needs quoting (special chars or reserved word)
fn needs_quoting(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return true;
    }
    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '$')) {
        return true;
    }
    RESERVED_WORDS.contains(name.to_ascii_uppercase().as_str())
}

/// Quote a single identifier according to the configured style and policy.
///
/// `*` is a wildcard, never an identifier, and passes through unchanged.
pub fn quote_ident(ident: &Ident, settings: &RenderSettings) -> String {
    let name = ident.as_str();
    if name == "*" {
        return name.to_string();
    }
    if settings.quote_policy == QuotePolicy::WhenNeeded && !needs_quoting(name) {
        return name.to_string();
    }

    let (open, close) = settings.quote_style.delimiters();
    let escaped = name.replace(close, &format!("{close}{close}"));
    format!("{open}{escaped}{close}")
}

/// Quote each present part and join them with `.`
pub fn quote_qualified<'a, I>(parts: I, settings: &RenderSettings) -> String
where
    I: IntoIterator<Item = Option<&'a Ident>>,
{
    parts
        .into_iter()
        .flatten()
        .map(|part| quote_ident(part, settings))
        .collect::<Vec<_>>()
        .join(".")
}
