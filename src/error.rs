use std::borrow::Cow;
use std::fmt;

/// The resource operation a failed request belonged to.
///
/// Each operation owns one fixed failure message; callers that need more
/// than the message can match on the variant instead of parsing text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Operation {
    /// `GET /api/writer-config`
    Fetch,
    /// `PUT /api/writer-config`
    Update,
    /// `DELETE /api/writer-config`
    Delete,
}

impl Operation {
    pub(crate) const fn failure_message(self) -> &'static str {
        match self {
            Operation::Fetch => "Failed to fetch writer config",
            Operation::Update => "Failed to update writer config",
            Operation::Delete => "Failed to delete writer config",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Fetch => "fetch",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Kind {
    /// A request against the writer-config resource did not fully succeed.
    ///
    /// Covers non-2xx statuses, transport failures, and malformed response
    /// bodies alike; the three collapse into this single signal.
    RequestFailed,
    /// The client was configured with values it cannot work with.
    ///
    /// Only produced during construction, never by an operation.
    Validation,
}

/// Error type returned by all fallible calls in this crate.
///
/// Request failures intentionally carry nothing beyond the operation and its
/// fixed message: the server owns the authoritative record, and the caller's
/// only recovery is to try again later. Enable the `tracing` feature to see
/// the underlying cause (status code, transport error, decode path) in logs.
#[derive(Debug)]
pub struct Error {
    kind: Kind,
    operation: Option<Operation>,
    message: Cow<'static, str>,
}

impl Error {
    pub(crate) fn request_failed(operation: Operation) -> Self {
        Self {
            kind: Kind::RequestFailed,
            operation: Some(operation),
            message: Cow::Borrowed(operation.failure_message()),
        }
    }

    pub(crate) fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: Kind::Validation,
            operation: None,
            message: message.into(),
        }
    }

    /// Classification of this error.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The operation that failed, when the error came out of one.
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::validation(format!("invalid host url: {err}"))
    }
}
