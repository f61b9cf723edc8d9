//! Transport-level failures: the request never produced a usable response.

/// Errors raised before a structured server answer is available.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The configured base URL cannot be parsed or joined.
    #[error("invalid api base url `{base}`: {source}")]
    InvalidBaseUrl {
        base: String,
        #[source]
        source: url::ParseError,
    },

    /// Connection, DNS, CORS or body read failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A 2xx response whose body is not the expected JSON shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
