use std::fmt;
use std::sync::Arc;

use bon::bon;
use reqwest::Client as ReqwestClient;
use reqwest::Method;
use url::Url;

use crate::Result;
use crate::auth::{self, TokenProvider};
use crate::error::{Error, Operation};
use crate::types::{WriterConfig, WriterConfigUpdate};

/// Resource path of the singleton writer configuration, relative to the host.
const WRITER_CONFIG_PATH: &str = "api/writer-config";

/// Client for the writer-config resource.
///
/// Stateless between calls: every operation reads the bearer token from the
/// injected [`TokenProvider`], performs one round trip against the fixed
/// resource URL, and decodes (or discards) the body. The server is the
/// authoritative copy; nothing is cached here, and concurrent calls from
/// clones or shared references are independent.
#[derive(Clone)]
pub struct WriterConfigClient {
    endpoint: Url,
    token_provider: Arc<dyn TokenProvider>,
    client: ReqwestClient,
}

#[bon]
impl WriterConfigClient {
    /// Creates a client for the writer-config resource hosted at `host`.
    ///
    /// `host` is the service origin, e.g. `http://127.0.0.1:8000`. A path
    /// prefix survives only when the URL ends with `/` (standard [`Url::join`]
    /// semantics). Pass `client` to control timeouts, proxies, or TLS, since
    /// this crate imposes no deadline of its own; otherwise a default
    /// [`reqwest::Client`] is used.
    #[builder]
    pub fn new<P>(host: Url, token_provider: P, client: Option<ReqwestClient>) -> Result<Self>
    where
        P: TokenProvider + 'static,
    {
        let endpoint = host.join(WRITER_CONFIG_PATH)?;
        Ok(Self {
            endpoint,
            token_provider: Arc::new(token_provider),
            client: client.unwrap_or_default(),
        })
    }

    /// Fetches the current writer configuration.
    pub async fn fetch_config(&self) -> Result<WriterConfig> {
        let request = self.authorized(Method::GET, Operation::Fetch)?;
        crate::request::<WriterConfig>(&self.client, request, Operation::Fetch).await
    }

    /// Replaces the writer configuration and returns the server's copy.
    ///
    /// The update is sent as-is; the server enforces its accepted range. The
    /// returned record is decoded from the response rather than assumed equal
    /// to `update`.
    pub async fn update_config(&self, update: &WriterConfigUpdate) -> Result<WriterConfig> {
        let request = self
            .authorized_builder(Method::PUT, Operation::Update)?
            .json(update)
            .build()
            .map_err(|_err| Error::request_failed(Operation::Update))?;
        crate::request::<WriterConfig>(&self.client, request, Operation::Update).await
    }

    /// Deletes the stored writer configuration.
    ///
    /// Succeeds on any 2xx answer; the body is ignored. The server treats
    /// deletion as idempotent and falls back to its environment override or
    /// built-in default on later fetches.
    pub async fn delete_config(&self) -> Result<()> {
        let request = self.authorized(Method::DELETE, Operation::Delete)?;
        crate::request_empty(&self.client, request, Operation::Delete).await
    }

    /// Full URL of the writer-config resource this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn authorized(&self, method: Method, operation: Operation) -> Result<reqwest::Request> {
        self.authorized_builder(method, operation)?
            .build()
            .map_err(|_err| Error::request_failed(operation))
    }

    /// Request builder for `method` with the auth and content-type headers
    /// already attached. The token is read here, at call time.
    fn authorized_builder(
        &self,
        method: Method,
        operation: Operation,
    ) -> Result<reqwest::RequestBuilder> {
        let headers = auth::request_headers(self.token_provider.as_ref()).map_err(|_err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                %operation,
                error = %_err,
                "bearer token is not representable as a header value"
            );
            Error::request_failed(operation)
        })?;
        Ok(self
            .client
            .request(method, self.endpoint.clone())
            .headers(headers))
    }
}

impl fmt::Debug for WriterConfigClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterConfigClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}
