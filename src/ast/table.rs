use serde::{Deserialize, Serialize};

use super::Ident;

/// A table reference, optionally qualified by database and schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    #[serde(default)]
    pub db: Option<Ident>,
    #[serde(default)]
    pub schema: Option<Ident>,
    pub table: Ident,
    #[serde(default, rename = "as")]
    pub alias: Option<Ident>,
}

impl TableRef {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            db: None,
            schema: None,
            table: Ident::new(table),
            alias: None,
        }
    }

    pub fn with_db(mut self, db: impl Into<String>) -> Self {
        self.db = Some(Ident::new(db));
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(Ident::new(schema));
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(Ident::new(alias));
        self
    }
}
