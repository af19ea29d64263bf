//! tabview - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tabview::config::CliOverrides;
use tabview::model::{AppError, PageSize, ResourceKind};
use tracing::info;

/// tabview - browse paged remote tables in the terminal
#[derive(Parser, Debug)]
#[command(name = "tabview")]
#[command(version)]
#[command(about = "TUI for browsing the users and products listings of a DummyJSON-style API")]
pub struct Args {
    /// Resource shown on startup (users or products)
    #[arg(short, long)]
    pub resource: Option<ResourceKind>,

    /// Rows per page (5, 10, 20 or 50)
    #[arg(short, long, value_parser = parse_page_size)]
    pub page_size: Option<PageSize>,

    /// Start with a client-side search term applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Base URL of the remote API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            resource: self.resource,
            page_size: self.page_size,
            search: self.search.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

fn parse_page_size(raw: &str) -> Result<PageSize, String> {
    let value: u32 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    PageSize::try_from(value).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(&args)?;
    Ok(())
}

fn run(args: &Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = tabview::config::load_config_with_precedence(args.config.clone())?;
        let merged = tabview::config::merge_config(config_file)?;
        let with_env = tabview::config::apply_env_overrides(merged);
        tabview::config::apply_cli_overrides(with_env, args.overrides())
    };

    // Held until exit so buffered log lines are flushed
    let _log_guard = tabview::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    tabview::view::run(&config, args.no_color)?;

    Ok(())
}
