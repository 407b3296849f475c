//! Domain types for plugin secrets

pub mod newtypes;
pub mod record;

pub use newtypes::{EncryptedBlob, PluginIdentity};
pub use record::CredentialsRecord;
