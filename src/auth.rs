//! Bearer-token credential sources and per-request header assembly.
//!
//! The backend authenticates every call with `Authorization: Bearer <token>`.
//! Instead of reaching into an application-global store, the client reads the
//! token from an injected [`TokenProvider`] at call time, so rotation is the
//! provider's business and the client never caches credentials.

use std::sync::{Arc, PoisonError, RwLock};

use reqwest::header::{
    AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, InvalidHeaderValue,
};
use secrecy::ExposeSecret as _;
use secrecy::SecretString;

/// Source of the bearer token attached to every request.
///
/// Implementations must be cheap and non-blocking: the token is read
/// synchronously once per request. Closures returning a [`SecretString`]
/// implement this trait, so a token-provider function is enough:
///
/// ```
/// use secrecy::{ExposeSecret, SecretString};
/// use writer_config_client::auth::TokenProvider;
///
/// let provider = || SecretString::from("session-token".to_owned());
/// assert_eq!(provider.bearer_token().expose_secret(), "session-token");
/// ```
pub trait TokenProvider: Send + Sync {
    /// The token to send on the next request.
    fn bearer_token(&self) -> SecretString;
}

impl<F> TokenProvider for F
where
    F: Fn() -> SecretString + Send + Sync,
{
    fn bearer_token(&self) -> SecretString {
        self()
    }
}

/// Provider for a token fixed at construction time.
#[derive(Clone, Debug)]
pub struct StaticToken {
    token: SecretString,
}

impl StaticToken {
    #[must_use]
    pub fn new<T: Into<SecretString>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenProvider for StaticToken {
    fn bearer_token(&self) -> SecretString {
        self.token.clone()
    }
}

/// Cloneable handle over a mutable token slot.
///
/// This is the injected replacement for the app-global auth store: keep one
/// handle wherever sign-in or refresh happens and give a clone to the client.
/// Calls made after [`set`](Self::set) carry the new value.
#[derive(Clone, Debug)]
pub struct SharedToken {
    slot: Arc<RwLock<SecretString>>,
}

impl SharedToken {
    #[must_use]
    pub fn new<T: Into<SecretString>>(token: T) -> Self {
        Self {
            slot: Arc::new(RwLock::new(token.into())),
        }
    }

    /// Replaces the stored token.
    pub fn set<T: Into<SecretString>>(&self, token: T) {
        let mut guard = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *guard = token.into();
    }
}

impl TokenProvider for SharedToken {
    fn bearer_token(&self) -> SecretString {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Builds the header set every writer-config request carries.
///
/// The `Authorization` value is marked sensitive so transport-level logging
/// redacts it.
pub(crate) fn request_headers(
    provider: &dyn TokenProvider,
) -> Result<HeaderMap, InvalidHeaderValue> {
    let token = provider.bearer_token();
    let mut authorization =
        HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, authorization);
    Ok(headers)
}
