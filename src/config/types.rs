use anyhow::{Result, anyhow};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigInput {
    pub render: Option<RenderInput>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Config {
    pub render: RenderSettings,
}

// Render configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RenderInput {
    pub quote_style: Option<QuoteStyle>,
    pub quote_policy: Option<QuotePolicy>,
    pub max_depth: Option<usize>,
    pub statement_separator: Option<String>,
}

/// Settings every renderer reads through [`crate::render::RenderContext`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSettings {
    pub quote_style: QuoteStyle,
    pub quote_policy: QuotePolicy,
    /// Maximum nesting of IF branch bodies
    pub max_depth: usize,
    /// Placed between statements of a statement list
    pub statement_separator: String,
}

/// Character pair used to quote identifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    /// `name` (MySQL)
    #[default]
    Backtick,
    /// "name" (ANSI, PostgreSQL)
    Double,
    /// [name] (SQL Server)
    Bracket,
}

impl QuoteStyle {
    pub fn delimiters(self) -> (char, char) {
        match self {
            QuoteStyle::Backtick => ('`', '`'),
            QuoteStyle::Double => ('"', '"'),
            QuoteStyle::Bracket => ('[', ']'),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuoteStyle::Backtick => "backtick",
            QuoteStyle::Double => "double",
            QuoteStyle::Bracket => "bracket",
        }
    }
}

impl FromStr for QuoteStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "backtick" => Ok(QuoteStyle::Backtick),
            "double" => Ok(QuoteStyle::Double),
            "bracket" => Ok(QuoteStyle::Bracket),
            other => Err(anyhow!(
                "Invalid quote style '{}'. Expected one of: backtick, double, bracket",
                other
            )),
        }
    }
}

/// When identifiers get quoted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum QuotePolicy {
    /// Only names that are reserved words or contain special characters
    #[default]
    WhenNeeded,
    Always,
}

impl QuotePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            QuotePolicy::WhenNeeded => "when_needed",
            QuotePolicy::Always => "always",
        }
    }
}

impl FromStr for QuotePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "when_needed" => Ok(QuotePolicy::WhenNeeded),
            "always" => Ok(QuotePolicy::Always),
            other => Err(anyhow!(
                "Invalid quote policy '{}'. Expected one of: when_needed, always",
                other
            )),
        }
    }
}

// CLI argument groups for command-specific options
#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    #[arg(long, value_enum, help = "Identifier quote style")]
    pub quote_style: Option<QuoteStyle>,

    #[arg(long, value_enum, help = "When to quote identifiers")]
    pub quote_policy: Option<QuotePolicy>,

    #[arg(long, help = "Maximum nesting depth of IF bodies")]
    pub max_depth: Option<usize>,

    #[arg(long, help = "Separator placed between statements of a nested body")]
    pub separator: Option<String>,
}

impl From<RenderArgs> for RenderInput {
    fn from(args: RenderArgs) -> Self {
        Self {
            quote_style: args.quote_style,
            quote_policy: args.quote_policy,
            max_depth: args.max_depth,
            statement_separator: args.separator,
        }
    }
}
