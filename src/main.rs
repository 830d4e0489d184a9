use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use sqlify::commands::{self, render::InputFormat};
use sqlify::config;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = sqlify::constants::CONFIG_FILENAME, global = true)]
    config_file: String,

    /// Enable verbose output (info level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
struct RenderCommandArgs {
    /// Statement document (JSON or YAML), or `-` for stdin
    input: String,

    /// Input format (detected from the file extension by default)
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Write rendered SQL to a file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<String>,

    #[command(flatten)]
    render_args: config::RenderArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Render statements to SQL, one per line
    Render(RenderCommandArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<commands::config::ConfigCommands>,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    initialize_logging(&cli);
    run_main(cli)
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    // stdout carries rendered SQL only
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_main(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render(args) => {
            let file_config = config::load_config(&cli.config_file)?;
            let cli_config = config::ConfigInput {
                render: Some(args.render_args.into()),
            };

            let config = config::ConfigBuilder::new()
                .with_file(file_config)
                .with_cli_args(cli_config)
                .resolve()?;

            info!("Rendering statements from {}", args.input);
            commands::cmd_render(
                &config,
                commands::render::RenderArgs {
                    input: args.input,
                    format: args.format,
                    output: args.output,
                },
            )
        }
        Commands::Config { command } => {
            info!("Managing configuration");
            commands::cmd_config(&cli.config_file, command)
        }
    }
}
