mod auth;
pub mod drive;
mod error;
pub mod models;
pub mod sheets;

pub use error::SourceError;
