//! Options controlling where the resolver looks for secrets

use beeutil_core::constants::{
    BEEUTIL_API_BASE_VAR, BEEUTIL_PLUGIN_NAME_VAR, BEEUTIL_SECRETS_FILE_VAR, DEFAULT_API_BASE,
    DEFAULT_CONFIG_FILE,
};
use std::path::{Path, PathBuf};

/// Resolver inputs: plugin name, API base, local config path and whether
/// local sources are consulted before the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    plugin_name: Option<String>,
    api_base: String,
    config_path: Option<PathBuf>,
    prefer_local: bool,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self {
            plugin_name: None,
            api_base: DEFAULT_API_BASE.to_string(),
            config_path: None,
            prefer_local: true,
        }
    }

    /// Defaults overridden by `BEEUTIL_PLUGIN_NAME`, `BEEUTIL_API_BASE` and
    /// `BEEUTIL_SECRETS_FILE` when they are set and non-empty
    pub fn from_env() -> Self {
        let mut options = Self::new();
        if let Some(name) = non_empty_var(BEEUTIL_PLUGIN_NAME_VAR) {
            options.plugin_name = Some(name);
        }
        if let Some(base) = non_empty_var(BEEUTIL_API_BASE_VAR) {
            options.api_base = base;
        }
        if let Some(path) = non_empty_var(BEEUTIL_SECRETS_FILE_VAR) {
            options.config_path = Some(PathBuf::from(path));
        }
        options
    }

    /// Set the plugin name used for the remote fetch
    #[must_use]
    pub fn plugin_name(mut self, name: impl Into<String>) -> Self {
        self.plugin_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Set the local config file path
    #[must_use]
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Whether environment variables and the config file are tried first
    #[must_use]
    pub fn prefer_local(mut self, prefer_local: bool) -> Self {
        self.prefer_local = prefer_local;
        self
    }

    pub fn get_plugin_name(&self) -> Option<&str> {
        self.plugin_name.as_deref()
    }

    pub fn get_api_base(&self) -> &str {
        &self.api_base
    }

    /// Config path, falling back to `secrets.json` in the working directory
    pub fn get_config_path(&self) -> &Path {
        self.config_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE))
    }

    pub fn is_prefer_local(&self) -> bool {
        self.prefer_local
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
