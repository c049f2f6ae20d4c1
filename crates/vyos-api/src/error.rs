use thiserror::Error;

/// Top-level error type for the `vyos-api` crate.
///
/// Covers every failure mode: request validation, encoding, transport,
/// cancellation, and envelope decoding. An appliance-reported command
/// failure (`success: false` in the envelope) is deliberately *not* an
/// error here -- it is a valid protocol outcome returned to the caller
/// as data.
#[derive(Debug, Error)]
pub enum Error {
    // ── Validation ──────────────────────────────────────────────────
    /// A path-required operation (set/delete/comment/generate/reset)
    /// received an empty or blank path.
    #[error("path cannot be empty")]
    EmptyPath,

    /// A config load was requested without a file name.
    #[error("file name cannot be empty")]
    MissingFile,

    /// No cancellation token was supplied for the exchange.
    #[error("a cancellation token must be supplied")]
    MissingContext,

    // ── Cancellation ────────────────────────────────────────────────
    /// The cancellation token fired while the exchange was in flight.
    #[error("request cancelled")]
    Cancelled,

    // ── Encoding / decoding ─────────────────────────────────────────
    /// JSON serialization of the request envelope failed.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body was not a valid JSON envelope. Carries the
    /// raw body for debugging.
    #[error("failed to decode response envelope: {message}")]
    Decode { message: String, body: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Base URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No base URL was configured before dispatching a request.
    #[error("no base URL configured")]
    MissingBaseUrl,

    /// Building the underlying HTTP client failed (TLS setup).
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

impl Error {
    /// Returns `true` if the error was raised before any bytes were
    /// sent to the appliance (validation or configuration failures).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyPath | Self::MissingFile | Self::MissingContext | Self::MissingBaseUrl
        )
    }

    /// Returns `true` if this is a transient transport error worth
    /// retrying at a higher layer. The crate itself never retries.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
