//! Kline proxy server.
//!
//! # Usage
//!
//! ```sh
//! export DHAN_ACCESS_TOKEN="your-access-token"
//! export DHAN_SCRIP_MASTER="api-scrip-master.csv"
//! cargo run --release
//! ```
//!
//! See [`dhan_kline_proxy::config::ProxyConfig`] for every variable.

use std::process::ExitCode;
use std::sync::Arc;

use dhan_kline_proxy::client::DhanClient;
use dhan_kline_proxy::config::ProxyConfig;
use dhan_kline_proxy::instruments::InstrumentDirectory;
use dhan_kline_proxy::proxy::KlineProxy;
use dhan_kline_proxy::{Result, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(ProxyConfig::from_env()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e.detail());
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: ProxyConfig) -> Result<()> {
    tracing::info!(?cfg, "starting kline proxy");
    if cfg.access_token.is_empty() {
        tracing::warn!("DHAN_ACCESS_TOKEN is not set; DhanHQ will reject every request");
    }

    let addr = cfg.socket_addr()?;
    let directory = InstrumentDirectory::load(&cfg.scrip_master)?;
    let client = DhanClient::with_base_url(cfg.access_token, cfg.api_base_url)?;
    let proxy = Arc::new(KlineProxy::new(directory, client));

    server::serve(addr, proxy).await
}
