//! akerun - command-line access to the Akerun API
//!
//! A thin shell over the library for inspecting an account. Output is
//! pretty-printed JSON on stdout; logs go to stderr.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `AKERUN_ACCESS_TOKEN`: OAuth2 access token (or pass `--token`)
//! - `AKERUN_API_URL`: optional API host override
//! - `AKERUN_CLIENT_ID`, `AKERUN_CLIENT_SECRET`, `AKERUN_REDIRECT_URL`:
//!   needed only for `authorize-url`
//!
//! # Usage
//!
//! ```bash
//! akerun organizations
//! akerun users O-123 --limit 10
//! akerun group O-123 AG-456
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use akerun::{
    config::Config,
    models::{KeysParameter, OrganizationsParameter, Token, UsersParameter},
    AkerunClient, CallContext,
};

#[derive(Parser, Debug)]
#[command(name = "akerun")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// OAuth2 access token
    #[arg(long, global = true, env = "AKERUN_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Give up on a request after this many seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the OAuth authorization URL for this application
    AuthorizeUrl {
        /// Opaque state echoed back to the redirect URL
        #[arg(long, default_value = "")]
        state: String,
    },

    /// List accessible organizations
    Organizations {
        /// Maximum number of results
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show one organization
    Organization {
        /// Organization ID
        id: String,
    },

    /// List users of an organization
    Users {
        /// Organization ID
        org: String,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show one user
    User {
        /// Organization ID
        org: String,
        /// User ID
        id: String,
    },

    /// List keys of an organization
    Keys {
        /// Organization ID
        org: String,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show one key
    Key {
        /// Organization ID
        org: String,
        /// Key ID
        id: String,
    },

    /// List device groups of an organization
    Groups {
        /// Organization ID
        org: String,
    },

    /// Show one device group with its devices
    Group {
        /// Organization ID
        org: String,
        /// Group ID
        id: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to render JSON")?;
    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("akerun=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::debug!("Configuration loaded, api_url: {}", config.api_url);

    if let Commands::AuthorizeUrl { state } = &cli.command {
        let oauth = config.oauth.as_ref().context(
            "AKERUN_CLIENT_ID, AKERUN_CLIENT_SECRET and AKERUN_REDIRECT_URL must be set",
        )?;
        let url = oauth.authorize_url(&config.api_url, state)?;
        println!("{}", url);
        return Ok(());
    }

    let token = cli
        .token
        .as_deref()
        .map(Token::bearer)
        .context("An access token is required (--token or AKERUN_ACCESS_TOKEN)")?;

    let client = AkerunClient::new(&config).context("Failed to create Akerun client")?;
    let ctx = CallContext::new().with_timeout(Duration::from_secs(cli.timeout));

    match cli.command {
        Commands::AuthorizeUrl { .. } => {}
        Commands::Organizations { limit } => {
            let params = OrganizationsParameter {
                limit: limit.unwrap_or_default(),
                ..Default::default()
            };
            let organizations = client
                .list_organizations(&ctx, &token, params)
                .await
                .context("Failed to list organizations")?;
            print_json(&organizations)?;
        }
        Commands::Organization { id } => {
            let organization = client
                .get_organization(&ctx, &token, &id)
                .await
                .with_context(|| format!("Failed to get organization {}", id))?;
            print_json(&organization)?;
        }
        Commands::Users { org, limit } => {
            let params = UsersParameter {
                limit: limit.unwrap_or_default(),
                ..Default::default()
            };
            let users = client
                .list_users(&ctx, &token, &org, params)
                .await
                .context("Failed to list users")?;
            print_json(&users)?;
        }
        Commands::User { org, id } => {
            let user = client
                .get_user(&ctx, &token, &org, &id)
                .await
                .with_context(|| format!("Failed to get user {}", id))?;
            print_json(&user)?;
        }
        Commands::Keys { org, limit } => {
            let params = KeysParameter {
                limit: limit.unwrap_or_default(),
                ..Default::default()
            };
            let keys = client
                .list_keys(&ctx, &token, &org, params)
                .await
                .context("Failed to list keys")?;
            print_json(&keys)?;
        }
        Commands::Key { org, id } => {
            let key = client
                .get_key(&ctx, &token, &org, &id)
                .await
                .with_context(|| format!("Failed to get key {}", id))?;
            print_json(&key)?;
        }
        Commands::Groups { org } => {
            let groups = client
                .list_akerun_groups(&ctx, &token, &org)
                .await
                .context("Failed to list Akerun groups")?;
            print_json(&groups)?;
        }
        Commands::Group { org, id } => {
            let group = client
                .get_akerun_group(&ctx, &token, &org, &id)
                .await
                .with_context(|| format!("Failed to get Akerun group {}", id))?;
            print_json(&group)?;
        }
    }

    Ok(())
}
