mod commands;
mod config;
mod logging;
mod output;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use medium_api::{extract_article_id, MediumClient};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::debug;

use commands::ApiCommand;
use config::Config;

/// Query the Medium data API from your terminal.
#[derive(Parser)]
#[command(name = "medium", version, about)]
struct Cli {
    /// RapidAPI key (overrides RAPIDAPI_KEY and the config file)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Path to the configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(flatten)]
    Api(ApiCommand),

    /// Print the article id embedded in a URL (no request is made)
    ExtractId { url: String },

    /// Show or edit the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show where the config lives and what it contains (the key is never printed)
    Show,
    /// Store an API key in the config file
    SetKey { key: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config_path = cli.config.clone().or_else(Config::config_path);
    let mut config = config_path
        .as_deref()
        .map(Config::load_from)
        .unwrap_or_default();

    logging::init(&config.log_level, cli.verbose);
    debug!(config = ?config_path, "configuration loaded");

    let pretty = config.pretty && !cli.compact;

    match cli.command {
        Command::ExtractId { url } => match extract_article_id(&url) {
            Some(id) => println!("{}", id),
            None => bail!("no article id found in {:?}", url),
        },
        Command::Config { action } => run_config(action, &mut config, config_path.as_deref(), pretty)?,
        Command::Api(command) => {
            let api_key = config.resolve_api_key(cli.api_key)?;
            let client = MediumClient::new(api_key);

            let reply = commands::execute(&client, command)
                .await
                .context("request to the Medium API failed")?;

            if !output::print_reply(&reply, pretty) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn run_config(action: ConfigAction, config: &mut Config, path: Option<&Path>, pretty: bool) -> Result<()> {
    let path = path.context("could not determine a configuration directory; pass --config")?;

    match action {
        ConfigAction::Show => {
            let summary = json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
                "api_key_configured": config.api_key.is_some(),
                "log_level": config.log_level,
                "pretty": config.pretty,
            });
            println!("{}", output::render(&summary, pretty));
        }
        ConfigAction::SetKey { key } => {
            config
                .set_api_key(key, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("API key saved to {}", path.display());
        }
    }

    Ok(())
}
