use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{HttpLoginClient, LoginForm};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod session;
mod terminal;

use config::{load_settings, DEFAULT_CONFIG_FILE};
use terminal::{Prefill, StdinSource, TerminalForm};

#[derive(Parser, Debug)]
#[command(about = "Sign in to a form-login server from the terminal")]
struct Args {
    /// Base URL of the login server; `/login` is resolved against its origin.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long)]
    username: Option<String>,
    #[arg(long)]
    password: Option<String>,
    /// Stop after the first attempt instead of prompting again on failure.
    #[arg(long)]
    once: bool,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();

    let settings = load_settings(&args.config).with_overrides(args.server_url);
    let client = HttpLoginClient::new(&settings.server_url)
        .with_context(|| format!("cannot use server url {:?}", settings.server_url))?;
    info!(url = %client.login_url(), "login form ready");

    let view = Arc::new(TerminalForm::new());
    let form = LoginForm::new(Arc::clone(&view), Arc::new(client));
    let prefill = Prefill {
        username: args.username,
        password: args.password,
    };

    let accepted = session::run(&form, &view, prefill, StdinSource, args.once).await?;
    Ok(if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
