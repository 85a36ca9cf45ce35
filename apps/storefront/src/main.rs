//! # Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        storefront                                       │
//! │                                                                         │
//! │  main.rs ────► parse flags, load config, init logging, open session    │
//! │                                                                         │
//! │  cli.rs ─────► one command (exit code 1 on error) or the shell         │
//! │                                                                         │
//! │  commands/ ──► add_to_cart, list_products, confirm_checkout, ...       │
//! │                                                                         │
//! │  state/ ─────► SessionCart, AuthState, AppConfig                       │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  <data_dir>/storage.json           https://fakestoreapi.com/products   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use storefront_lib::cli::{execute, render, run_shell, Cli};
use storefront_lib::state::AppConfig;
use storefront_lib::{init_tracing, Session};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.clone()).context("loading configuration")?;
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }

    init_tracing(&config.logging.filter);
    info!(version = env!("CARGO_PKG_VERSION"), "Starting storefront");

    let session = Session::open(&config).context("opening session")?;

    match cli.command {
        Some(command) => {
            let result = execute(&session, command).await;
            println!("{}", render(&result));
            Ok(if result.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_shell(&session, stdin.lock(), stdout.lock()).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
