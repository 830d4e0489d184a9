//! Single-clause commands: CALL, DDL actions, DESCRIBE, RENAME, USE, SET,
//! LOCK/UNLOCK and DEALLOCATE

use serde::{Deserialize, Serialize};

use super::{ColumnRef, Expr, Ident, TableRef};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub expr: Expr,
}

/// `CREATE`/`DROP`/`ALTER`/`TRUNCATE` style commands on a named object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonCommand {
    #[serde(rename = "type")]
    pub action: String,
    /// `table`, `trigger`, `database`, `schema`, `procedure`, `view` or `index`
    pub keyword: String,
    #[serde(default)]
    pub prefix: Option<String>,
    pub name: CommandTarget,
    /// Owning table of an index
    #[serde(default)]
    pub table: Option<TableRef>,
    #[serde(default)]
    pub options: Vec<Expr>,
}

impl CommonCommand {
    pub fn new(action: impl Into<String>, keyword: impl Into<String>, name: CommandTarget) -> Self {
        Self {
            action: action.into(),
            keyword: keyword.into(),
            prefix: None,
            name,
            table: None,
            options: vec![],
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

/// The object a [`CommonCommand`] acts on; its shape follows the object keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandTarget {
    Tables(Vec<TableRef>),
    Trigger(TriggerName),
    Identifier(Ident),
    /// Index names are parsed as column references
    Index(ColumnRef),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerName {
    #[serde(default)]
    pub schema: Option<Ident>,
    pub trigger: Ident,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Describe {
    #[serde(rename = "type")]
    pub action: String,
    pub table: Ident,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rename {
    #[serde(rename = "type")]
    pub action: String,
    /// Each group is chained with `TO`: `a TO b`
    #[serde(default)]
    pub table: Vec<Vec<TableRef>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Use {
    #[serde(rename = "type")]
    pub action: String,
    pub db: Ident,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetVariable {
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockUnlock {
    /// `lock` or `unlock`
    #[serde(rename = "type")]
    pub action: String,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub tables: Vec<LockTable>,
    #[serde(default)]
    pub lock_mode: Option<LockMode>,
    #[serde(default)]
    pub nowait: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockTable {
    pub table: TableRef,
    #[serde(default)]
    pub lock_type: Option<LockType>,
}

/// MySQL lock type such as `READ LOCAL` or `LOW_PRIORITY WRITE`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockType {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default, rename = "type")]
    pub lock: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

/// PostgreSQL lock mode clause, e.g. `in access exclusive mode`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockMode {
    pub mode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deallocate {
    #[serde(rename = "type")]
    pub action: String,
    #[serde(default)]
    pub keyword: Option<String>,
    pub expr: Expr,
}
