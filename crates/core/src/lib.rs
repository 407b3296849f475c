//! Core domain types, errors, and constants for the plugin secrets subsystem.
//!
//! ## Key Components
//!
//! - **`errors`**: the `SecretsError` taxonomy and `Result` alias shared by
//!   every secrets operation.
//! - **`types`**: newtypes for plugin identities and encrypted blobs, and the
//!   `CredentialsRecord` mapping that flows through encryption and validation.
//! - **`constants`**: fixed protocol parameters, environment variable names
//!   and defaults.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Result, SecretsError},
    types::*,
};
