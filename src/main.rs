//! Predator Dashboard
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Settings come from `--config`, else `~/.config/predator-dashboard/config.toml`
//! or `./config.toml`, else defaults. Environment variables override the file:
//! - `PREDATOR_DATA_PATH`: CSV path (default: static/data/Predator_control.csv)
//! - `PREDATOR_HOST`: Host to bind to (default: 0.0.0.0)
//! - `PREDATOR_PORT`: Port to listen on (default: 8050)
//! - `PREDATOR_LOG_LEVEL`: Log level (default: info)
//! - `PREDATOR_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter directive, wins over the log level

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use predator_dashboard::config::{generate_default_config, Config, LogFormat, LoggingConfig};
use predator_dashboard::dashboard::{render_page, serve, AppState};
use predator_dashboard::{create_predator_control_chart, load_predator_data, prepare_predator_chart_data};

#[derive(Parser)]
#[command(name = "predator-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Predator control dashboard: trap counts, pests caught and catch rate by year")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard (default)
    Serve {
        /// CSV data file
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Render the page or figure without starting a server
    Render {
        /// CSV data file
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = RenderFormat::Html)]
        format: RenderFormat,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RenderFormat {
    /// Standalone dashboard page
    Html,
    /// Plotly figure JSON
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(Config::discover);
    let config = match Config::resolve(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&LoggingConfig::default());
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);

    match run(cli, config_path, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config_path: Option<PathBuf>, mut config: Config) -> anyhow::Result<()> {
    match &config_path {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }

    match cli.command.unwrap_or(Commands::Serve {
        data: None,
        host: None,
        port: None,
    }) {
        Commands::Serve { data, host, port } => {
            if let Some(data) = data {
                config.data.path = data;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            run_server(config).await
        }
        Commands::Render {
            data,
            format,
            output,
        } => {
            if let Some(data) = data {
                config.data.path = data;
            }
            run_render(&config, format, output.as_deref())
        }
        Commands::Config { output } => write_output(output.as_deref(), &generate_default_config()),
    }
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting predator dashboard v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("Data file: {:?}", config.data.path);

    let state = AppState::load(&config.data.path, &config.page)
        .with_context(|| format!("failed to load {}", config.data.path.display()))?;

    if let Some((first, last)) = state.table.year_span() {
        tracing::info!(rows = state.record_count(), first, last, "Predator control data ready");
    }

    tracing::info!("Starting server on {}", config.server.addr());
    serve(state, &config.server).await?;

    tracing::info!("Predator dashboard stopped");
    Ok(())
}

fn run_render(config: &Config, format: RenderFormat, output: Option<&Path>) -> anyhow::Result<()> {
    let table = load_predator_data(&config.data.path)
        .with_context(|| format!("failed to load {}", config.data.path.display()))?;

    let figure = create_predator_control_chart(&prepare_predator_chart_data(&table));

    let content = match format {
        RenderFormat::Html => render_page(&figure, &config.page)?,
        RenderFormat::Json => serde_json::to_string_pretty(&figure)?,
    };

    write_output(output, &content)
}

fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

/// Initialize tracing from the logging config; `RUST_LOG` takes precedence
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("predator_dashboard={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    // stderr keeps `render` output on stdout clean
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => registry.with(layer.json()).init(),
        LogFormat::Pretty => registry.with(layer).init(),
    }
}
