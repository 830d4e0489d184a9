use crate::ast::Statement;
use crate::config::Config;
use crate::render::{RenderContext, SqlRenderer};
use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Input document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// `.yaml`/`.yml` files are YAML, everything else (including stdin) is JSON
    pub fn detect(input: &str) -> Self {
        match Path::new(input).extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                InputFormat::Yaml
            }
            _ => InputFormat::Json,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub input: String,
    pub format: Option<InputFormat>,
    pub output: Option<String>,
}

/// Read the input document and render every statement in it
pub fn cmd_render(config: &Config, args: RenderArgs) -> Result<()> {
    let format = args
        .format
        .unwrap_or_else(|| InputFormat::detect(&args.input));
    let source = read_input(&args.input)?;
    let statements = parse_statements(&source, format)
        .with_context(|| format!("Failed to parse statements from '{}'", args.input))?;
    info!("Rendering {} statement(s)", statements.len());

    let output = render_lines(&statements, config)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &output)
                .with_context(|| format!("Failed to write output file '{}'", path))?;
            info!("Wrote rendered SQL to {}", path);
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// One rendered statement per line
pub fn render_lines(statements: &[Statement], config: &Config) -> Result<String> {
    let ctx = RenderContext::new(&config.render);
    let mut output = String::new();
    for (index, stmt) in statements.iter().enumerate() {
        let sql = stmt.to_sql(&ctx).with_context(|| {
            format!(
                "Failed to render statement #{} ({})",
                index + 1,
                stmt.kind()
            )
        })?;
        output.push_str(&sql);
        output.push('\n');
    }
    Ok(output)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        debug!("Reading statements from stdin");
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read statements from stdin")?;
        return Ok(source);
    }

    if !Path::new(input).exists() {
        bail!("Input file '{}' not found", input);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read input file '{}'", input))
}

/// A document holds either a single statement or a list of them
pub fn parse_statements(source: &str, format: InputFormat) -> Result<Vec<Statement>> {
    match format {
        InputFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(source)?;
            if value.is_array() {
                Ok(serde_json::from_value(value)?)
            } else {
                Ok(vec![serde_json::from_value(value)?])
            }
        }
        InputFormat::Yaml => {
            let value: serde_yaml::Value = serde_yaml::from_str(source)?;
            if value.is_sequence() {
                Ok(serde_yaml::from_value(value)?)
            } else {
                Ok(vec![serde_yaml::from_value(value)?])
            }
        }
    }
}
