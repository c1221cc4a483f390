//! Error types for the Yahoo Fantasy stats exporter

use thiserror::Error;

pub type Result<T> = std::result::Result<T, YahooError>;

#[derive(Error, Debug)]
pub enum YahooError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to get the `{env_var}` environment variable")]
    MissingCredential { env_var: String },

    #[error("Authorization failed: {message}")]
    Authorization { message: String },

    #[error("No authorization code was entered")]
    EmptyAuthCode,

    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Invalid league key: {key} (expected `<game>.l.<league id>`)")]
    InvalidLeagueKey { key: String },

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),
}
