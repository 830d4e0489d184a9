use serde::{Deserialize, Serialize};

use super::{ColumnDefinition, DataType, Expr};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declare {
    #[serde(rename = "type")]
    pub action: String,
    pub declare: Vec<Declaration>,
}

/// One `@name [AS] ...` entry of a DECLARE statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Sigil, usually `@`
    pub at: String,
    pub name: String,
    #[serde(default, rename = "as")]
    pub has_as: bool,
    #[serde(flatten)]
    pub kind: DeclarationKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "keyword", rename_all = "snake_case")]
pub enum DeclarationKind {
    Variable {
        data_type: DataType,
        #[serde(default)]
        default: Option<Expr>,
    },
    Cursor {
        prefix: String,
    },
    Table {
        prefix: String,
        definition: Vec<ColumnDefinition>,
    },
}

impl Declaration {
    pub fn variable(name: impl Into<String>, data_type: DataType, default: Option<Expr>) -> Self {
        Self {
            at: "@".to_string(),
            name: name.into(),
            has_as: false,
            kind: DeclarationKind::Variable { data_type, default },
        }
    }

    pub fn cursor(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            at: "@".to_string(),
            name: name.into(),
            has_as: false,
            kind: DeclarationKind::Cursor {
                prefix: prefix.into(),
            },
        }
    }

    pub fn table(name: impl Into<String>, definition: Vec<ColumnDefinition>) -> Self {
        Self {
            at: "@".to_string(),
            name: name.into(),
            has_as: false,
            kind: DeclarationKind::Table {
                prefix: "table".to_string(),
                definition,
            },
        }
    }

    pub fn with_as(mut self) -> Self {
        self.has_as = true;
        self
    }
}
