use thiserror::Error;

/// Error type shared by every component in this crate.
///
/// Variants are grouped by kind: configuration, user input, transport and
/// decoding. Nothing here terminates the process; the CLI layer turns an
/// error into a non-zero exit.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or unusable configuration (API key, reference tables).
    #[error("configuration error: {0}")]
    Config(String),

    /// The API key was rejected by the provider.
    #[error("invalid API key")]
    InvalidApiKey,

    /// The requested city or coordinates could not be resolved.
    #[error("can't find city name: {0}")]
    LocationNotFound(String),

    /// Any non-2xx status not covered by a more specific variant.
    #[error("HTTP error: {0}")]
    Http(u16),

    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not the JSON we expected.
    #[error("JSON decode error: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
