use astra::Response;
// errors.rs
use std::fmt;

/// Errors originating from routing and request handling. Data-source
/// failures never reach this type; the adapters absorb them into empty
/// results and the aggregator falls back to sample data.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
