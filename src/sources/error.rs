use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum SourceError {
    Config(String),
    Network(String),
    Auth(String),
    JsonParse(String),
    UnexpectedShape(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Config(msg) => write!(f, "Config error: {msg}"),
            SourceError::Network(msg) => write!(f, "Network error: {msg}"),
            SourceError::Auth(msg) => write!(f, "Auth error: {msg}"),
            SourceError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            SourceError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
        }
    }
}

impl Error for SourceError {}
