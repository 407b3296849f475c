//! Multi-source secrets resolution.
//!
//! Order of precedence:
//! 1. the cache, when already populated
//! 2. `PLUGIN_AWS_*` environment variables (local sources only)
//! 3. the local JSON config file (local sources only)
//! 4. the plugin API, decrypted through the cache
//!
//! Local probes are soft and fall through; remote, decryption and validation
//! failures propagate unchanged. Nothing is retried.

use beeutil_core::{CredentialsRecord, Result, SecretsError};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{HttpPluginApi, PluginApi};
use crate::cache::SecretsCache;
use crate::options::LoadOptions;
use crate::sources::{load_from_env, load_from_file};

/// Where a resolved record came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretsSource {
    Cache,
    Environment,
    ConfigFile(PathBuf),
    Remote { plugin: String },
}

impl fmt::Display for SecretsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretsSource::Cache => write!(f, "cache"),
            SecretsSource::Environment => write!(f, "environment"),
            SecretsSource::ConfigFile(path) => write!(f, "config file '{}'", path.display()),
            SecretsSource::Remote { plugin } => write!(f, "plugin API ('{plugin}')"),
        }
    }
}

/// A resolved record together with its source
#[derive(Debug, Clone)]
pub struct Resolved {
    pub record: CredentialsRecord,
    pub source: SecretsSource,
}

/// Resolves plugin credentials from local and remote sources into a shared cache
pub struct SecretsResolver {
    cache: Arc<SecretsCache>,
    api: Box<dyn PluginApi>,
}

impl SecretsResolver {
    /// Create a resolver backed by the HTTP plugin API
    pub fn new(cache: Arc<SecretsCache>) -> Result<Self> {
        Ok(Self::with_api(cache, Box::new(HttpPluginApi::new()?)))
    }

    /// Create a resolver with a custom plugin API
    pub fn with_api(cache: Arc<SecretsCache>, api: Box<dyn PluginApi>) -> Self {
        Self { cache, api }
    }

    pub fn cache(&self) -> &Arc<SecretsCache> {
        &self.cache
    }

    /// Resolve secrets, returning only the record
    pub fn load(&self, options: &LoadOptions) -> Result<CredentialsRecord> {
        self.resolve(options).map(|resolved| resolved.record)
    }

    /// Resolve secrets and report which source satisfied the request
    pub fn resolve(&self, options: &LoadOptions) -> Result<Resolved> {
        if let Some(record) = self.cache.get() {
            tracing::debug!("Returning cached secrets");
            return Ok(Resolved {
                record,
                source: SecretsSource::Cache,
            });
        }

        if options.is_prefer_local() {
            if let Some(record) = self.try_env()? {
                return Ok(record);
            }
            if let Some(record) = self.try_file(options)? {
                return Ok(record);
            }
        }

        let Some(plugin_name) = options.get_plugin_name() else {
            return Err(SecretsError::NoSource);
        };
        self.fetch_remote(plugin_name, options.get_api_base())
    }

    fn try_env(&self) -> Result<Option<Resolved>> {
        let Some(record) = load_from_env() else {
            return Ok(None);
        };

        tracing::info!(source = "env", "Loaded plugin secrets from environment");
        Ok(Some(Resolved {
            record: self.cache.store(record)?,
            source: SecretsSource::Environment,
        }))
    }

    fn try_file(&self, options: &LoadOptions) -> Result<Option<Resolved>> {
        let path = options.get_config_path();
        let Some(record) = load_from_file(Some(path)) else {
            return Ok(None);
        };

        tracing::info!(
            source = "file",
            path = %path.display(),
            "Loaded plugin secrets from config file"
        );
        Ok(Some(Resolved {
            record: self.cache.store(record)?,
            source: SecretsSource::ConfigFile(path.to_path_buf()),
        }))
    }

    fn fetch_remote(&self, plugin_name: &str, api_base: &str) -> Result<Resolved> {
        let fetched = self.api.fetch(plugin_name, api_base).map_err(|e| {
            tracing::error!(plugin = %plugin_name, error = %e, "Failed to fetch plugin secrets");
            e
        })?;

        let record = self
            .cache
            .get_or_decrypt(&fetched.plugin_id, &fetched.encrypted_secrets)?;

        tracing::info!(source = "api", plugin = %plugin_name, "Loaded plugin secrets from API");
        Ok(Resolved {
            record,
            source: SecretsSource::Remote {
                plugin: plugin_name.to_string(),
            },
        })
    }
}

impl fmt::Debug for SecretsResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretsResolver")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
