//! Error types returned by VoxBox API calls.

/// Errors produced by the request pipeline and the endpoint functions.
///
/// The two failure modes every call can hit are kept distinguishable:
/// [`Error::Api`] is the backend refusing the request through the response
/// envelope (`success: false`), while [`Error::Transport`] is the request
/// never completing at all (connection, TLS, timeout, non-2xx status).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend answered with an envelope whose `success` flag was false.
    /// Carries the human-readable `message` from the envelope.
    #[error("{message}")]
    Api {
        /// Failure message reported by the backend.
        message: String,
    },

    /// The request failed at the transport level: connection refused,
    /// timeout, or a non-success HTTP status.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a valid envelope, or its `data` did not
    /// match the expected shape.
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading or writing the persisted client identity failed.
    #[error("identity storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Client-side configuration problem, e.g. an unparseable base URL or an
    /// invalid header value.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl Error {
    /// Message the pipeline reports when a failure envelope carries no text.
    pub(crate) fn generic_api() -> Self {
        Error::Api { message: "request failed".to_string() }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
