//! Client for the plugin registry API.
//!
//! `GET {api_base}/api/plugins/{plugin_name}` answers with a JSON document
//! carrying the plugin identifier (`_id`) and its encrypted credentials
//! (`encrypted_secrets`).

use beeutil_core::constants::{PLUGIN_API_TIMEOUT_SECS, RESPONSE_ID_FIELD, RESPONSE_SECRETS_FIELD};
use beeutil_core::{EncryptedBlob, PluginIdentity, Result, SecretsError};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

const DEFAULT_USER_AGENT: &str = concat!("beeutil/", env!("CARGO_PKG_VERSION"));

/// Identifier and encrypted blob returned for a plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSecrets {
    pub plugin_id: PluginIdentity,
    pub encrypted_secrets: EncryptedBlob,
}

/// Source of a plugin's identifier and encrypted credentials
pub trait PluginApi: Send + Sync {
    /// Fetch the identifier and blob for `plugin_name`
    ///
    /// # Returns
    /// * `Err(NotFound)` - the API answered 404, or a success response lacked
    ///   `_id` or `encrypted_secrets`
    /// * `Err(Network)` - transport failure or any other non-success status
    fn fetch(&self, plugin_name: &str, api_base: &str) -> Result<PluginSecrets>;
}

/// Blocking HTTP implementation of [`PluginApi`]
#[derive(Debug, Clone)]
pub struct HttpPluginApi {
    client: Client,
}

impl HttpPluginApi {
    /// Create a client with the default 10 second timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(PLUGIN_API_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| {
                SecretsError::network("<client>", format!("failed to create HTTP client: {e}"))
            })?;
        Ok(Self { client })
    }
}

impl PluginApi for HttpPluginApi {
    fn fetch(&self, plugin_name: &str, api_base: &str) -> Result<PluginSecrets> {
        let url = plugin_url(api_base, plugin_name)?;
        let endpoint = url.to_string();

        tracing::debug!(plugin = %plugin_name, endpoint = %endpoint, "Fetching plugin secrets");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| SecretsError::network(&endpoint, e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SecretsError::not_found(
                plugin_name,
                "plugin API returned 404",
            ));
        }

        if !status.is_success() {
            return Err(SecretsError::http_status(
                &endpoint,
                status.as_u16(),
                status.canonical_reason().unwrap_or("unexpected status"),
            ));
        }

        let body: serde_json::Value = response.json().map_err(|e| {
            SecretsError::network(&endpoint, format!("invalid response body: {e}"))
        })?;

        let field = |name: &str| {
            body.get(name)
                .and_then(serde_json::Value::as_str)
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
        };

        match (field(RESPONSE_ID_FIELD), field(RESPONSE_SECRETS_FIELD)) {
            (Some(plugin_id), Some(blob)) => Ok(PluginSecrets {
                plugin_id: PluginIdentity::new(plugin_id),
                encrypted_secrets: EncryptedBlob::new(blob),
            }),
            _ => Err(SecretsError::not_found(
                plugin_name,
                "plugin response missing _id or encrypted_secrets",
            )),
        }
    }
}

/// Build `{api_base}/api/plugins/{plugin_name}`, encoding the name as a
/// single path segment.
pub fn plugin_url(api_base: &str, plugin_name: &str) -> Result<Url> {
    let mut url = Url::parse(api_base)
        .map_err(|e| SecretsError::network(api_base, format!("invalid API base URL: {e}")))?;

    url.path_segments_mut()
        .map_err(|()| SecretsError::network(api_base, "API base URL cannot carry a path"))?
        .pop_if_empty()
        .extend(["api", "plugins", plugin_name]);

    Ok(url)
}
