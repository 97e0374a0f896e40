use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gatekeeper::{ClientConfig, GateKeeper, HostProfile};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gatekeeper",
    about = "Phone fraud checks against the Gatekeeper scoring API",
    version
)]
struct Cli {
    /// Override the API base URL.
    #[arg(long, env = "GATEKEEPER_API_URL", global = true)]
    api_url: Option<String>,

    /// Log the would-be payload and return a placeholder verdict without calling the API.
    #[arg(long, env = "GATEKEEPER_PRINT", global = true)]
    print: bool,

    /// Send a synthesized placeholder credential instead of the API key.
    #[arg(long, env = "GATEKEEPER_DEBUG", global = true)]
    debug: bool,

    /// Request timeout in seconds.
    #[arg(
        long,
        env = "GATEKEEPER_TIMEOUT_SECS",
        default_value = "10",
        global = true
    )]
    timeout_secs: u64,

    /// JSON host profile describing the client environment.
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Collect a snapshot and score the phone number.
    Check {
        phone_number: String,
        /// Bearer credential (a JWT).
        #[arg(long, env = "GATEKEEPER_API_KEY", hide_env_values = true)]
        api_key: String,
    },
    /// Collect and print a snapshot only.
    Collect,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default()
            .with_print_mode(self.print)
            .with_debug_mode(self.debug)
            .with_request_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(url) = &self.api_url {
            config = config.with_api_url(url.clone());
        }
        config
    }
}

async fn load_profile(path: Option<&Path>) -> anyhow::Result<HostProfile> {
    let Some(path) = path else {
        return Ok(HostProfile::default());
    };
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading host profile {}", path.display()))?;
    HostProfile::from_json(&json)
        .with_context(|| format!("parsing host profile {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("gatekeeper v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let profile = load_profile(cli.profile.as_deref()).await?;
    let config = cli.client_config();

    match &cli.command {
        Command::Check {
            phone_number,
            api_key,
        } => {
            let gatekeeper = GateKeeper::new(api_key.as_str(), profile, config)?;
            let verdict = gatekeeper.check_phone_number(phone_number).await?;
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
        Command::Collect => {
            // Collection needs no credential; a placeholder satisfies the constructor.
            let gatekeeper = GateKeeper::new("collect-only", profile, config)?;
            let snapshot = gatekeeper.collect_client_data().await?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_build_client_config() {
        let cli = Cli::parse_from([
            "gatekeeper",
            "--api-url",
            "http://localhost:4000/",
            "--print",
            "--timeout-secs",
            "3",
            "collect",
        ]);
        let config = cli.client_config();
        assert_eq!(config.base_url(), "http://localhost:4000");
        assert!(config.print_mode);
        assert!(!config.debug_mode);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn check_takes_phone_and_key() {
        let cli = Cli::parse_from([
            "gatekeeper",
            "check",
            "+15551234567",
            "--api-key",
            "a.b.c",
            "--debug",
        ]);
        assert!(cli.debug);
        match cli.command {
            Command::Check {
                phone_number,
                api_key,
            } => {
                assert_eq!(phone_number, "+15551234567");
                assert_eq!(api_key, "a.b.c");
            }
            Command::Collect => panic!("expected check"),
        }
    }

    #[tokio::test]
    async fn missing_profile_uses_empty_host() {
        assert_eq!(load_profile(None).await.unwrap(), HostProfile::default());
        let missing = Path::new("/nonexistent/profile.json");
        assert!(load_profile(Some(missing)).await.is_err());
    }
}
