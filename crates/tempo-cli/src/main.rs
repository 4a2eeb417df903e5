//! tempo CLI - current time as an MCP tool over stdio.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;

use tempo_config::{LogFormat, TempoConfig};
use tempo_types::TempoError;

mod commands;
mod input;
mod output;
pub(crate) mod shared;

/// tempo - MCP server exposing the current time and date.
#[derive(Debug, Parser)]
#[command(name = "tempo", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv). Overrides LOG_LEVEL.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain or json (for log aggregation).
    #[arg(long, global = true, value_parser = ["plain", "json"])]
    log_format: Option<String>,

    /// Defaults to `serve`.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the MCP server over stdio (default).
    Serve(commands::serve::ServeArgs),
    /// List the tools the server exposes.
    List(commands::list::ListArgs),
    /// Invoke a tool once and print the result.
    Call(commands::call::CallArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = tempo_config::load_config(cli.config.as_deref())
        .map_err(|e| output::fatal(e, "loading configuration"))?;

    init_tracing(&cli, &config);
    tracing::debug!(config_file = ?cli.config, ?config, "tempo starting");

    let result = match &cli.command {
        None => commands::serve::execute(&Default::default(), &config).await,
        Some(Commands::Serve(args)) => commands::serve::execute(args, &config).await,
        Some(Commands::List(args)) => commands::list::execute(args),
        Some(Commands::Call(args)) => commands::call::execute(args).await,
    };

    if let Err(e) = &result {
        match e.downcast_ref::<TempoError>() {
            Some(domain) => tracing::error!(kind = ?domain.kind, error = %domain, "fatal error"),
            None => tracing::error!(error = %e, "fatal error"),
        }
    }
    result
}

/// Installs the global subscriber. Logs always go to stderr: stdout
/// belongs to the protocol.
fn init_tracing(cli: &Cli, config: &TempoConfig) {
    let filter = shared::log_filter(cli.verbose, &config.logging.level);
    let format = match cli.log_format.as_deref() {
        Some("json") => LogFormat::Json,
        Some(_) => LogFormat::Plain,
        None => config.logging.format,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter.directive.as_str())
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        LogFormat::Plain => builder.init(),
    }

    if let Some(level) = &filter.rejected {
        tracing::warn!(%level, fallback = %filter.directive, "unrecognised log level");
    }
}
