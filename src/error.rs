// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-wide error type.
///
/// Network and API failures are kept as separate variants so the log output
/// distinguishes transport problems from bad responses, but the gallery state
/// machine treats both as an opaque fetch failure and only keeps the message.
#[derive(Debug, Clone)]
pub enum Error {
    /// Transport-level failure (DNS, TLS, connection reset, timeout).
    Network(String),
    /// The server answered, but not usefully (non-2xx status, malformed JSON).
    Api(String),
    /// Downloaded bytes could not be decoded as an image.
    Decode(String),
    Config(String),
    Io(String),
}

impl Error {
    /// Returns the i18n message key for this error variant.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Network(_) => "error-network",
            Error::Api(_) => "error-api",
            Error::Decode(_) => "error-decode",
            Error::Config(_) => "error-config",
            Error::Io(_) => "error-io",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_status() || err.is_decode() {
            Error::Api(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
