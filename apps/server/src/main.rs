use anyhow::Context;
use homeval::domain::config::ApiConfig;
use homeval::domain::constants::DEFAULT_CONFIG_FILE;
use homeval::kernel::config::load_config;
use homeval_server::{Server, init_logging};
use std::path::PathBuf;

#[homeval_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from);

    let cfg: ApiConfig =
        load_config(Some(&path)).context("Critical: Configuration is malformed")?;

    let _log = init_logging(&cfg.logging)?;
    tracing::info!(config = %path.display(), "Configuration loaded");

    Server::builder().config(cfg).build().await?.run().await
}
