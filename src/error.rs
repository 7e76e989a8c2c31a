//! Error types for the API keys client
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations, etc.)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// Transport failure, timeout, or undecodable response body
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// The server answered with a non-success status
    #[snafu(display("Network response was not ok: HTTP {status} from {url}"))]
    Network { status: u16, url: String },

    /// Channel send error
    #[snafu(display("Channel send error: {message}"))]
    ChannelSend { message: String },
}

impl Error {
    /// HTTP status of a `Network` error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Network { status, .. } => Some(*status),
            Error::Http { source } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_display() {
        let err = Error::Network {
            status: 502,
            url: "http://localhost:4000/api/account/api-keys".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Network response was not ok: HTTP 502 from http://localhost:4000/api/account/api-keys"
        );
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_invalid_has_no_status() {
        let err = Error::Invalid {
            message: "empty name".to_string(),
        };
        assert_eq!(err.status(), None);
    }
}
