use serde::{Deserialize, Serialize};

use super::{ColumnRef, Expr, Ident, Literal};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    #[serde(rename = "type")]
    pub action: String,
    /// `priv` or `proxy`
    pub keyword: String,
    pub objects: Vec<PrivilegeObject>,
    #[serde(default)]
    pub on: Option<GrantTarget>,
    pub to: Vec<UserOrRole>,
    #[serde(default)]
    pub with: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivilegeObject {
    #[serde(rename = "priv")]
    pub privilege: Expr,
    #[serde(default)]
    pub columns: Option<Vec<ColumnRef>>,
}

impl PrivilegeObject {
    pub fn new(privilege: impl Into<String>) -> Self {
        Self {
            privilege: Expr::keyword(privilege),
            columns: None,
        }
    }

    pub fn with_columns(mut self, columns: Vec<ColumnRef>) -> Self {
        self.columns = Some(columns);
        self
    }
}

/// The `ON` target; privilege grants name objects, proxy grants name a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GrantTarget {
    Privilege {
        object_type: Literal,
        priv_level: Vec<PrivilegeLevel>,
    },
    Proxy(UserOrRole),
}

/// `[prefix.]name`, e.g. `mydb.*` or `*.*`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivilegeLevel {
    #[serde(default)]
    pub prefix: Option<Ident>,
    pub name: Ident,
}

impl PrivilegeLevel {
    pub fn new(prefix: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.map(Ident::from),
            name: Ident::new(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserOrRole {
    pub name: Literal,
    #[serde(default)]
    pub host: Option<Literal>,
}

impl UserOrRole {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Literal::string(name),
            host: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(Literal::string(host));
        self
    }
}
