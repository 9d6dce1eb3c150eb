// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    Network(String),
    /// The server answered with something other than `200 OK`.
    HttpStatus(u16),
    /// The body could not be decoded into the expected shape.
    Decode(String),
    PermissionDenied,
    PermissionRestricted,
    Location(String),
}

/// Coarse failure classes shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    PermissionDenied,
    PermissionRestricted,
    NetworkFailure,
    DecodeFailure,
    Other,
}

impl Error {
    pub fn kind(&self) -> FailureKind {
        match self {
            Error::PermissionDenied => FailureKind::PermissionDenied,
            Error::PermissionRestricted => FailureKind::PermissionRestricted,
            Error::Network(_) | Error::HttpStatus(_) => FailureKind::NetworkFailure,
            Error::Decode(_) => FailureKind::DecodeFailure,
            Error::Io(_) | Error::Config(_) | Error::Location(_) => FailureKind::Other,
        }
    }

    /// Whether retrying the same operation could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Location(_))
            || matches!(
                self.kind(),
                FailureKind::NetworkFailure | FailureKind::DecodeFailure
            )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::HttpStatus(code) => write!(f, "HTTP Error: unexpected status {}", code),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::PermissionDenied => write!(f, "Location permission denied"),
            Error::PermissionRestricted => write!(f, "Location use is restricted"),
            Error::Location(e) => write!(f, "Location Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

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

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Error::HttpStatus(status.as_u16());
        }
        if err.is_decode() {
            return Error::Decode(err.to_string());
        }
        Error::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
