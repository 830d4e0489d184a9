// Configuration file name
pub const CONFIG_FILENAME: &str = "sqlify.yaml";

// Environment fallback for render.quote_style
pub const QUOTE_STYLE_ENV: &str = "SQLIFY_QUOTE_STYLE";

// Rendering defaults
pub const DEFAULT_MAX_DEPTH: usize = 64;
pub const DEFAULT_STATEMENT_SEPARATOR: &str = " ; ";
