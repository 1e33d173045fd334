//! Round-trips the writer configuration against a live backend.
//!
//! ```sh
//! WRITER_API_HOST=http://127.0.0.1:8000 \
//! WRITER_API_TOKEN=<session token> \
//! RUST_LOG=info,writer_config_client=debug \
//! cargo run --example writer_config --features tracing
//! ```

use anyhow::Context as _;
use secrecy::SecretString;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;
use writer_config_client::auth::StaticToken;
use writer_config_client::{WriterConfigClient, WriterConfigUpdate};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new("info")),
        )
        .init();

    let host =
        std::env::var("WRITER_API_HOST").unwrap_or_else(|_err| "http://127.0.0.1:8000".to_owned());
    let token = std::env::var("WRITER_API_TOKEN").context("WRITER_API_TOKEN must be set")?;

    let client = WriterConfigClient::builder()
        .host(Url::parse(&host)?)
        .token_provider(StaticToken::new(SecretString::from(token)))
        .build()?;

    let current = client.fetch_config().await?;
    info!(chapter_versions = current.chapter_versions, "current config");

    let next = current.chapter_versions % 10 + 1;
    let updated = client.update_config(&WriterConfigUpdate::new(next)).await?;
    info!(chapter_versions = updated.chapter_versions, "updated config");

    client.delete_config().await?;
    let restored = client.fetch_config().await?;
    info!(
        chapter_versions = restored.chapter_versions,
        "config after reset"
    );

    Ok(())
}
