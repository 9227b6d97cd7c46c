//! Store error types.

/// Errors from the data store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API key was rejected
    #[error("unauthorized: check SUPABASE_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Client could not be set up
    #[error("invalid store configuration: {0}")]
    Config(String),

    /// Mock data file could not be read or parsed
    #[error("mock data error: {0}")]
    MockData(String),
}
