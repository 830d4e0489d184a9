use crate::config::{merge::Merge, types::*};
use crate::constants::QUOTE_STYLE_ENV;
use anyhow::{Context, Result, bail};

pub struct ConfigBuilder {
    config_input: ConfigInput,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
        }
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    pub fn resolve(self) -> Result<Config> {
        let defaults = Config::default();

        Ok(Config {
            render: self.resolve_render(&defaults.render)?,
        })
    }

    fn resolve_render(&self, defaults: &RenderSettings) -> Result<RenderSettings> {
        let render_input = self.config_input.render.as_ref();

        let quote_style = match render_input.and_then(|r| r.quote_style) {
            Some(style) => style,
            None => match std::env::var(QUOTE_STYLE_ENV) {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("Invalid {} environment variable", QUOTE_STYLE_ENV))?,
                Err(_) => defaults.quote_style,
            },
        };

        let max_depth = render_input
            .and_then(|r| r.max_depth)
            .unwrap_or(defaults.max_depth);
        if max_depth == 0 {
            bail!("render.max_depth must be at least 1");
        }

        Ok(RenderSettings {
            quote_style,
            quote_policy: render_input
                .and_then(|r| r.quote_policy)
                .unwrap_or(defaults.quote_policy),
            max_depth,
            statement_separator: render_input
                .and_then(|r| r.statement_separator.as_ref())
                .cloned()
                .unwrap_or_else(|| defaults.statement_separator.clone()),
        })
    }
}
