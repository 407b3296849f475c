//! Plugin secrets: per-plugin key derivation, envelope encryption of
//! credentials records, validation, a caller-owned decrypted-secrets cache
//! and a resolver that tries the environment, a local file and finally the
//! plugin API.
//!
//! ```ignore
//! use std::sync::Arc;
//! use beeutil_secrets::{LoadOptions, SecretsCache, SecretsResolver};
//!
//! let resolver = SecretsResolver::new(Arc::new(SecretsCache::new()))?;
//! let secrets = resolver.load(&LoadOptions::from_env().plugin_name("uploader"))?;
//! ```

pub mod api;
pub mod cache;
pub mod envelope;
pub mod kdf;
pub mod options;
pub mod resolver;
pub mod sources;
pub mod validate;

pub use api::{plugin_url, HttpPluginApi, PluginApi, PluginSecrets};
pub use beeutil_core::{
    CredentialsRecord, EncryptedBlob, PluginIdentity, Result, SecretsError,
};
pub use cache::SecretsCache;
pub use envelope::{decrypt, encrypt, AesCbcEnvelope, EnvelopeCodec};
pub use kdf::derive_key;
pub use options::LoadOptions;
pub use resolver::{Resolved, SecretsResolver, SecretsSource};
pub use sources::{load_from_env, load_from_file};
pub use validate::validate;
