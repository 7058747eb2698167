//! Standalone web server binary.
//!
//! Configuration comes from the environment:
//!   OPENAI_API_KEY            required
//!   OPENAI_BASE_URL           default https://api.openai.com/v1
//!   SPECSKETCH_MODEL          default gpt-4o
//!   PORT                      default 3000
//!   DATA_SERVICE_SESSION_URL  optional, enables the keep-alive probe
//!   DATA_SERVICE_KEY          optional, sent with the probe

use anyhow::Context;
use specsketch::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().context("invalid configuration")?;

    specsketch::server::run(config)
        .await
        .map_err(|e| anyhow::anyhow!("server error: {e}"))
}
