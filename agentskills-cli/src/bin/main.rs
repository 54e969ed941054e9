use agentskills_cli::{Command, Runner};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the agentskills API
    #[arg(short, long, env = "AGENTSKILLS_API_BASE_URL", default_value = "http://localhost:8000")]
    api_base_url: String,
    /// File holding the saved tokens [default: <config dir>/agentskills/tokens.json]
    #[arg(short, long, env = "AGENTSKILLS_TOKEN_FILE")]
    token_file: Option<PathBuf>,
    /// Log level, overridden by RUST_LOG
    #[arg(long, env = "AGENTSKILLS_LOG_LEVEL", default_value = "warn")]
    log_level: String,
    #[arg(long, env = "AGENTSKILLS_LOG_FORMAT", value_enum, default_value = "text")]
    log_format: LogFormat,
    /// Debug logging
    #[arg(short, long)]
    debug: bool,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = if args.debug { "debug" } else { args.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    match args.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init(),
    }
    Runner::new(args.api_base_url, args.token_file)?.run(args.command).await
}
