use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use api_gateway::build_router;
use authn_resolver::AuthNResolver;
use axum::Router;
use clap::{Parser, Subcommand};
use static_identity_plugin::StaticIdentityPlugin;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod config;

use config::{AppConfig, LoggingConfig};

/// Yoga studio backend server
#[derive(Parser, Debug)]
#[command(name = "studio-server")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print a bcrypt hash for an identity list entry
    HashPassword {
        /// Secret to hash; read from stdin when omitted
        password: Option<String>,

        /// bcrypt work factor; defaults to `auth.bcrypt_cost`
        #[arg(long)]
        cost: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&cfg).await,
        Command::HashPassword { password, cost } => {
            hash_password(password, cost.unwrap_or(cfg.auth.bcrypt_cost))
        }
    }
}

async fn serve(cfg: &AppConfig) -> Result<()> {
    init_logging(&cfg.logging)?;

    let identities =
        StaticIdentityPlugin::init(&cfg.identities).context("failed to load identity list")?;
    let authn = AuthNResolver::init(&cfg.auth, identities)
        .context("failed to initialize authn resolver")?;
    let router = build_router(&cfg.api_gateway, authn, Router::new())?;

    let listener = tokio::net::TcpListener::bind(&cfg.api_gateway.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.api_gateway.bind_addr))?;
    info!(addr = %listener.local_addr()?, "studio-server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("studio-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// `RUST_LOG` wins over `logging.level`.
fn init_logging(cfg: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cfg.level)
            .with_context(|| format!("invalid logging.level '{}'", cfg.level))?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    if cfg.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()?;
    }
    Ok(())
}

fn hash_password(password: Option<String>, cost: u32) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => {
            let mut line = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_owned()
        }
    };
    anyhow::ensure!(!password.is_empty(), "password must not be empty");

    let hash = bcrypt::hash(&password, cost).context("failed to hash password")?;
    println!("{hash}");
    Ok(())
}
