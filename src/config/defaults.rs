use crate::config::types::*;
use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_STATEMENT_SEPARATOR};

// Config derives Default

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            quote_style: QuoteStyle::default(),
            quote_policy: QuotePolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            statement_separator: DEFAULT_STATEMENT_SEPARATOR.to_string(),
        }
    }
}
