//! Command-line front end for HODL.ar wallet onboarding
//!
//! Provisions a wallet for a GitHub username, validates its LNDHub
//! credentials, stores it as an account and makes it the active one.

mod i18n;
mod observer;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use hodl_onboard_app::{AppConfig, AppState, AppStateBuilder};
use hodl_onboard_core::types::{AccountId, SignupRequest};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::i18n::t;
use crate::observer::TerminalObserver;

#[derive(Debug, Parser)]
#[command(name = "hodl-onboard", version)]
#[command(about = "Create a HODL.ar Lightning wallet from a GitHub username", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding config.json and accounts.json
    #[arg(long, global = true, env = "HODL_ONBOARD_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Signup endpoint (overrides config and HODL_CREATE_URL)
    #[arg(long, global = true)]
    signup_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a wallet for a GitHub user and make it the active account
    Signup {
        /// GitHub username
        github: String,
    },
    /// List stored accounts
    Accounts,
    /// Show the active account
    Active,
    /// Make a stored account the active one
    Select {
        /// Account id as printed by `accounts`
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(log_filter(cli.verbose, &rust_log))
        .init();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` directives when given, otherwise `warn` (`debug` with `-v`).
fn log_filter(verbose: bool, rust_log: &str) -> EnvFilter {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(rust_log)
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = AppConfig::load(cli.data_dir).context("failed to load configuration")?;
    if let Some(url) = cli.signup_url {
        config.signup_url = url;
    }
    tracing::debug!(data_dir = %config.data_dir.display(), signup_url = %config.signup_url, "configuration loaded");

    let state = AppStateBuilder::new(config)
        .observer(Arc::new(TerminalObserver))
        .with_local_host()
        .await
        .context("failed to open the account store")?
        .build()?;
    state.run_account_restore().await;

    match cli.command {
        Command::Signup { github } => Ok(signup(&state, &github).await),
        Command::Accounts => list_accounts(&state).await,
        Command::Active => {
            match state.account_store.active_account().await {
                Some(id) => println!("{id}"),
                None => println!("{}", t().common.no_active_account),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Select { id } => {
            state
                .account_store
                .select(&AccountId::new(id))
                .await
                .context("failed to select account")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Failures were already rendered as toasts by the observer.
async fn signup(state: &AppState, github: &str) -> ExitCode {
    if let Ok(request) = SignupRequest::parse(github) {
        eprintln!("{} {}", t().hodlar.profile_hint, request.profile_url());
    }

    match state.orchestrator.signup(github).await {
        Ok(id) => {
            println!("{id}");
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}

async fn list_accounts(state: &AppState) -> anyhow::Result<ExitCode> {
    let accounts = state.account_store.list_accounts().await?;
    if accounts.is_empty() {
        println!("{}", t().common.no_accounts);
        return Ok(ExitCode::SUCCESS);
    }

    let active = state.account_store.active_account().await;
    for account in accounts {
        let marker = if active.as_ref() == Some(&account.id) {
            t().common.active_marker
        } else {
            " "
        };
        println!(
            "{marker} {}  {}  {}  {}",
            account.id,
            account.name,
            account.connector,
            account.ln_address.as_deref().unwrap_or("-")
        );
    }
    Ok(ExitCode::SUCCESS)
}
