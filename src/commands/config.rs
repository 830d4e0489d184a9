use crate::config::{Config, ConfigBuilder, ConfigInput, QuotePolicy, QuoteStyle, load_config};
use anyhow::{Context, Result, anyhow};
use std::path::Path;

/// Config subcommands
#[derive(Debug, Clone, clap::Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., render.quote_style, render.max_depth)
        key: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// New value
        value: String,
    },

    /// List all configuration values
    List {
        /// Output format
        #[arg(long, default_value = "yaml")]
        format: OutputFormat,
    },

    /// Validate configuration file
    Validate,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Execute config command against `config_file` (a missing file means defaults)
pub fn cmd_config(config_file: &str, subcommand: Option<ConfigCommands>) -> Result<()> {
    match subcommand {
        Some(ConfigCommands::Get { key, format }) => {
            let config = resolve_config(config_file)?;
            let value = get_config_value(&config, &key)?;
            print_value(&value, &format);
            Ok(())
        }

        Some(ConfigCommands::Set { key, value }) => {
            set_config_value(config_file, &key, &value)?;
            println!("✅ Configuration updated: {} = {}", key, value);
            Ok(())
        }

        Some(ConfigCommands::List { format }) => {
            let config = resolve_config(config_file)?;
            list_config_values(&config, &format)
        }

        Some(ConfigCommands::Validate) => {
            validate_config_file(config_file)?;
            println!("✅ Configuration file '{}' is valid", config_file);
            Ok(())
        }

        None => {
            println!("sqlify config - Manage sqlify configuration");
            println!();
            println!("Usage:");
            println!("  sqlify config get <KEY>           Get a configuration value");
            println!("  sqlify config set <KEY> <VALUE>   Set a configuration value");
            println!("  sqlify config list                List all configuration values");
            println!("  sqlify config validate            Validate configuration file");
            println!();
            println!("Examples:");
            println!("  sqlify config get render.quote_style");
            println!("  sqlify config set render.quote_policy always");
            println!("  sqlify config list --format json");
            Ok(())
        }
    }
}

fn resolve_config(config_file: &str) -> Result<Config> {
    ConfigBuilder::new()
        .with_file(load_config(config_file)?)
        .resolve()
}

/// Get a configuration value by key
fn get_config_value(config: &Config, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["render", "quote_style"] => Ok(config.render.quote_style.as_str().to_string()),
        ["render", "quote_policy"] => Ok(config.render.quote_policy.as_str().to_string()),
        ["render", "max_depth"] => Ok(config.render.max_depth.to_string()),
        ["render", "statement_separator"] => Ok(config.render.statement_separator.clone()),
        _ => Err(anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value, creating the file if it does not exist yet
fn set_config_value(config_file: &str, key: &str, value: &str) -> Result<()> {
    let config_path = Path::new(config_file);
    let mut config_input: ConfigInput = if config_path.exists() {
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read configuration file '{}'", config_file))?;
        serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse configuration file '{}'", config_file))?
    } else {
        ConfigInput::default()
    };

    let parts: Vec<&str> = key.split('.').collect();
    let render = config_input.render.get_or_insert_with(Default::default);

    match parts.as_slice() {
        ["render", "quote_style"] => {
            render.quote_style = Some(value.parse::<QuoteStyle>()?);
        }
        ["render", "quote_policy"] => {
            render.quote_policy = Some(value.parse::<QuotePolicy>()?);
        }
        ["render", "max_depth"] => {
            let depth = value
                .parse::<usize>()
                .map_err(|_| anyhow!("Invalid depth value: {}", value))?;
            if depth == 0 {
                return Err(anyhow!("render.max_depth must be at least 1"));
            }
            render.max_depth = Some(depth);
        }
        ["render", "statement_separator"] => {
            render.statement_separator = Some(value.to_string());
        }
        _ => return Err(anyhow!("Unknown or unsupported configuration key: {}", key)),
    }

    let yaml_str = serde_yaml::to_string(&config_input)?;
    std::fs::write(config_path, yaml_str)
        .with_context(|| format!("Failed to write configuration file '{}'", config_file))?;

    Ok(())
}

/// List all configuration values
fn list_config_values(config: &Config, format: &OutputFormat) -> Result<()> {
    let config_map = serde_json::json!({
        "render": {
            "quote_style": config.render.quote_style.as_str(),
            "quote_policy": config.render.quote_policy.as_str(),
            "max_depth": config.render.max_depth,
            "statement_separator": config.render.statement_separator,
        }
    });

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config_map)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&config_map)?);
        }
        OutputFormat::Text => {
            println!("Current Configuration:");
            println!();
            print_config_text(&config_map, 0);
        }
    }

    Ok(())
}

/// Print configuration in text format with indentation
fn print_config_text(value: &serde_json::Value, indent: usize) {
    let prefix = "  ".repeat(indent);

    match value {
        serde_json::Value::Object(map) => {
            for (key, val) in map {
                if val.is_object() {
                    println!("{}{}:", prefix, key);
                    print_config_text(val, indent + 1);
                } else {
                    println!("{}{}: {}", prefix, key, val);
                }
            }
        }
        _ => {
            println!("{}{}", prefix, value);
        }
    }
}

/// Validate configuration file
fn validate_config_file(config_file: &str) -> Result<()> {
    let config_path = Path::new(config_file);
    if !config_path.exists() {
        return Err(anyhow!("Configuration file '{}' not found", config_file));
    }

    let config_str = std::fs::read_to_string(config_path)?;
    let config_input: ConfigInput =
        serde_yaml::from_str(&config_str).map_err(|e| anyhow!("Invalid YAML syntax: {}", e))?;

    ConfigBuilder::new()
        .with_file(config_input)
        .resolve()
        .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

    Ok(())
}

/// Print a configuration value
fn print_value(value: &str, format: &OutputFormat) {
    match format {
        OutputFormat::Text | OutputFormat::Yaml => println!("{}", value),
        OutputFormat::Json => println!("{}", serde_json::json!(value)),
    }
}
