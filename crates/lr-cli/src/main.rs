use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::auth::{
    handle_login_command, handle_logout_command, handle_session_command, KeyringStore, MemoryStore,
    TokenStore,
};
use crate::modules::system::http::ApiClient;
use crate::modules::system::{
    ensure_secure_addr, handle_config_command, load_config, resolve_addr, save_config, CliConfig,
    CommandContext,
};

pub(crate) const DEFAULT_ADDR: &str = "https://127.0.0.1:8000/api";
pub(crate) const KEYRING_SERVICE: &str = "lr-cli";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let mut config = load_config()?;

    match cli.command {
        Command::Config(args) => {
            handle_config_command(args, &mut config)?;
            save_config(&config)?;
        }
        Command::Login(args) => {
            let api = build_api(cli.addr, cli.token, cli.insecure, &config)?;
            handle_login_command(args, &api).await?;
        }
        Command::Logout => {
            let api = build_api(cli.addr, cli.token, cli.insecure, &config)?;
            handle_logout_command(&api)?;
        }
        Command::Session => {
            let api = build_api(cli.addr, cli.token, cli.insecure, &config)?;
            handle_session_command(&api).await?;
        }
        command => {
            let api = build_api(cli.addr, cli.token, cli.insecure, &config)?;
            let ctx = CommandContext {
                api,
                config: &config,
            };
            handle_command(command, &ctx).await?;
        }
    }

    Ok(())
}

fn build_api(
    addr_arg: Option<String>,
    token_arg: Option<String>,
    insecure: bool,
    config: &CliConfig,
) -> anyhow::Result<ApiClient> {
    let addr = resolve_addr(addr_arg, config);
    ensure_secure_addr(&addr, insecure)?;
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(insecure)
        .build()?;
    let store: Arc<dyn TokenStore> = match token_arg {
        Some(token) => Arc::new(MemoryStore::with_access(&token)),
        None => Arc::new(KeyringStore::new(KEYRING_SERVICE)),
    };
    Ok(ApiClient::new(client, addr, insecure, store))
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .init();
    Ok(())
}

pub(crate) fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    let mut input = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub(crate) fn prompt_password(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;
    if password.trim().is_empty() {
        anyhow::bail!("password is required");
    }
    Ok(password)
}
