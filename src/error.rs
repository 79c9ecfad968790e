// SPDX-License-Identifier: MPL-2.0
use crate::domain::gallery::TransitionError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Network(NetworkError),
    Decode(String),
    Transition(TransitionError),
}

/// Failure while fetching an image resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The server answered with a non-success status.
    Status(u16),

    /// The request could not be sent or the body could not be read.
    Request(String),

    /// The resource path is not a valid URL for the configured server.
    InvalidUrl(String),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Status(code) => write!(f, "HTTP status {}", code),
            NetworkError::Request(msg) => write!(f, "Request failed: {}", msg),
            NetworkError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Transition(e) => write!(f, "State Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<NetworkError> for Error {
    fn from(err: NetworkError) -> Self {
        Error::Network(err)
    }
}

impl From<TransitionError> for Error {
    fn from(err: TransitionError) -> Self {
        Error::Transition(err)
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
        match err.status() {
            Some(status) => Error::Network(NetworkError::Status(status.as_u16())),
            None => Error::Network(NetworkError::Request(err.to_string())),
        }
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
