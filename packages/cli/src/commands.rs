// ABOUTME: Command line definitions and dispatch
// ABOUTME: serve, providers and suggest subcommands

use clap::{Parser, Subcommand};
use colored::*;
use laundry_config::Config;
use laundry_providers::ProviderRegistry;

use crate::server::run_server;

#[derive(Parser, Debug)]
#[command(name = "laundry")]
#[command(about = "Laundry tracker - item lifecycle API and care suggestions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Bind address (overrides LAUNDRY_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides LAUNDRY_PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Database URL (overrides LAUNDRY_DATABASE_URL)
        #[arg(long)]
        database: Option<String>,
    },
    /// List suggestion providers
    Providers,
    /// Print a care suggestion for the given context
    Suggest {
        context: String,
        /// Provider to use instead of the configured one
        #[arg(long)]
        provider: Option<String>,
    },
}

pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;

    match command {
        Commands::Serve {
            host,
            port,
            database,
        } => {
            apply_overrides(&mut config, host, port, database);
            run_server(config).await
        }
        Commands::Providers => {
            let registry = ProviderRegistry::with_defaults(config.openai_api_key);
            for name in registry.names() {
                if name == config.app.ml_provider {
                    println!("{} {}", name.green().bold(), "(active)".dimmed());
                } else {
                    println!("{}", name);
                }
            }
            Ok(())
        }
        Commands::Suggest { context, provider } => {
            let registry = ProviderRegistry::with_defaults(config.openai_api_key);
            let name = provider.unwrap_or(config.app.ml_provider);
            let provider = registry.resolve(&name)?;
            println!("{}", provider.suggest(&context).await);
            Ok(())
        }
    }
}

fn apply_overrides(
    config: &mut Config,
    host: Option<String>,
    port: Option<u16>,
    database: Option<String>,
) {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(database) = database {
        config.database_url = database;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base_config() -> Config {
        Config::from_lookup(|key| match key {
            "LAUNDRY_CONFIG_FILE" => Some("/nonexistent/config.yaml".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "laundry",
            "serve",
            "--port",
            "9000",
            "--database",
            "sqlite::memory:",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Commands::Serve {
                host: None,
                port: Some(9000),
                database: Some("sqlite::memory:".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_suggest() {
        let cli = Cli::try_parse_from(["laundry", "suggest", "red socks", "--provider", "openai"])
            .unwrap();

        assert_eq!(
            cli.command,
            Commands::Suggest {
                context: "red socks".to_string(),
                provider: Some("openai".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["laundry", "serve", "--port", "70000"]).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = base_config();
        apply_overrides(&mut config, Some("0.0.0.0".to_string()), Some(9100), None);

        assert_eq!(config.bind_address(), "0.0.0.0:9100");
        assert_eq!(config.database_url, "sqlite://laundry.db");
    }
}
