//! Futures Trader Binary
//!
//! Interactive order entry against the Binance futures testnet.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin futures-trader
//! ```
//!
//! # Environment Variables
//!
//! All optional; a `.env` file in the working directory or an ancestor is
//! loaded first.
//!
//! - `BINANCE_API_KEY` / `BINANCE_API_SECRET`: skip the credential prompts
//! - `BINANCE_ENV`: TESTNET | PRODUCTION (default: TESTNET)
//! - `BINANCE_FUTURES_BASE_URL`: REST base URL override
//! - `BINANCE_RECV_WINDOW_MS`: signed request window (default: 5000)
//! - `TRADER_HTTP_TIMEOUT_SECS`: HTTP timeout (default: none)
//! - `TRADER_LOG_FILE`: log file (default: `trading_bot.log`)
//! - `RUST_LOG`: Log filter (default: `futures_trader=info`)

use std::io;
use std::sync::Arc;

use anyhow::Context;
use futures_trader::PlaceOrderUseCase;
use futures_trader::infrastructure::cli::{Prompter, TradingSession, prompt_credentials};
use futures_trader::infrastructure::config::TraderConfig;
use futures_trader::infrastructure::exchange::binance::BinanceFuturesAdapter;
use futures_trader::infrastructure::telemetry::{env_filter, file_subscriber};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = TraderConfig::from_env().context("invalid configuration")?;

    let subscriber = file_subscriber(&config.log_file, env_filter())?;
    let _log_guard = tracing::subscriber::set_default(subscriber);

    tracing::info!(
        environment = %config.environment,
        log_file = %config.log_file.display(),
        "Starting futures trader"
    );

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    prompter.say("\nWelcome to the Binance Futures Testnet Trading Bot")?;

    let Some(credentials) =
        prompt_credentials(&mut prompter, config.api_key.clone(), config.api_secret.clone())?
    else {
        return Ok(());
    };

    let adapter = BinanceFuturesAdapter::new(config.binance_config(credentials))
        .context("cannot create futures client")?;

    let use_case = PlaceOrderUseCase::new(Arc::new(adapter));
    let mut session = TradingSession::new(use_case, prompter);
    session.run().await?;

    tracing::info!("Futures trader stopped");
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
