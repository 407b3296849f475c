//! Error types for plugin secrets operations

mod builders;
mod types;

pub use types::{Result, SecretsError};
