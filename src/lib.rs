//! Client SDK for the writer-config resource.
//!
//! The backend exposes the per-account writer configuration (currently the
//! number of candidate versions generated per chapter) as a singleton REST
//! resource at `/api/writer-config`. This crate wraps its three operations
//! (fetch, update, delete) behind [`WriterConfigClient`], authenticating each
//! call with a bearer token read from an injected
//! [`auth::TokenProvider`].
//!
//! Every call is one stateless round trip: no retries, no caching, no
//! client-side ordering between concurrent calls. A failed call surfaces as
//! [`Error`] with [`Kind::RequestFailed`] and a fixed per-operation message;
//! enable the `tracing` feature to get the underlying cause (status code,
//! transport error, JSON path) as log events instead.
//!
//! ```no_run
//! use url::Url;
//! use writer_config_client::auth::SharedToken;
//! use writer_config_client::{WriterConfigClient, WriterConfigUpdate};
//!
//! # async fn run() -> writer_config_client::Result<()> {
//! let token = SharedToken::new(secrecy::SecretString::from("jwt".to_owned()));
//! let client = WriterConfigClient::builder()
//!     .host(Url::parse("http://127.0.0.1:8000")?)
//!     .token_provider(token.clone())
//!     .build()?;
//!
//! let current = client.fetch_config().await?;
//! client
//!     .update_config(&WriterConfigUpdate::new(current.chapter_versions + 1))
//!     .await?;
//! client.delete_config().await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod error;

mod client;
mod types;

pub use client::WriterConfigClient;
pub use error::{Error, Kind, Operation};
pub use types::{WriterConfig, WriterConfigUpdate};

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;

/// Executes `request` and decodes the JSON body of a 2xx answer into `T`.
///
/// Any failure along the way (transport, non-success status, unreadable or
/// malformed body) collapses into the fixed [`Kind::RequestFailed`] error
/// for `operation`.
pub(crate) async fn request<T: DeserializeOwned>(
    client: &ReqwestClient,
    request: reqwest::Request,
    operation: Operation,
) -> Result<T> {
    let response = execute(client, request, operation).await?;
    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(%operation, error = %_err, "failed to read response body");
            return Err(Error::request_failed(operation));
        }
    };
    decode_body(&bytes, operation)
}

/// Executes `request`, requiring a 2xx answer and ignoring its body.
pub(crate) async fn request_empty(
    client: &ReqwestClient,
    request: reqwest::Request,
    operation: Operation,
) -> Result<()> {
    execute(client, request, operation).await.map(drop)
}

async fn execute(
    client: &ReqwestClient,
    request: reqwest::Request,
    operation: Operation,
) -> Result<reqwest::Response> {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        %operation,
        method = %request.method(),
        url = %request.url(),
        "dispatching writer-config request"
    );

    let response = match client.execute(request).await {
        Ok(response) => response,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(%operation, error = %_err, "transport failure");
            return Err(Error::request_failed(operation));
        }
    };

    let status = response.status();
    if !status.is_success() {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            %operation,
            status = status.as_u16(),
            "server answered with a failure status"
        );
        return Err(Error::request_failed(operation));
    }

    Ok(response)
}

/// Strict decode with diagnostics: failures are logged with the JSON path
/// that broke, and fields the schema does not know are logged at debug level
/// (they usually mean the server moved ahead of this crate).
#[cfg(feature = "tracing")]
fn decode_body<T: DeserializeOwned>(bytes: &[u8], operation: Operation) -> Result<T> {
    let mut json = serde_json::Deserializer::from_slice(bytes);
    let mut track = serde_path_to_error::Track::new();
    let tracked = serde_path_to_error::Deserializer::new(&mut json, &mut track);

    let value = match serde_ignored::deserialize(tracked, |path| {
        tracing::debug!(%operation, field = %path, "ignoring unknown field in response body");
    }) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(
                %operation,
                path = %track.path(),
                error = %err,
                "response body did not match the writer-config schema"
            );
            return Err(Error::request_failed(operation));
        }
    };

    // Match the strictness of `serde_json::from_slice`: the document must
    // end where the record ends.
    if let Err(err) = json.end() {
        tracing::warn!(%operation, error = %err, "response body has trailing data");
        return Err(Error::request_failed(operation));
    }
    Ok(value)
}

#[cfg(not(feature = "tracing"))]
fn decode_body<T: DeserializeOwned>(bytes: &[u8], operation: Operation) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|_err| Error::request_failed(operation))
}
