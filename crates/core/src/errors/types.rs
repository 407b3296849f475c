//! Core error type definitions

/// Result type alias for secrets operations
pub type Result<T> = std::result::Result<T, SecretsError>;

/// Base error kind for every failure in the secrets subsystem
#[derive(Debug, thiserror::Error)]
pub enum SecretsError {
    /// Malformed blob, bad base64/JSON, invalid padding or an undecodable plaintext
    #[error("decryption failed: {message}")]
    Decryption { message: String },

    /// Failure while producing a blob
    #[error("encryption failed: {message}")]
    Encryption { message: String },

    /// A record is missing one or more required fields
    #[error("missing required keys: {}", .missing.join(", "))]
    Validation { missing: Vec<String> },

    /// Transport failure or a non-404 error status from the plugin API
    #[error("{}", format_network_error(.endpoint, .status, .message))]
    Network {
        endpoint: String,
        status: Option<u16>,
        message: String,
    },

    /// The plugin API has no usable record for the plugin
    #[error("plugin '{plugin}' not found: {message}")]
    NotFound { plugin: String, message: String },

    /// No local source yielded secrets and no plugin name was given
    #[error(
        "no local secrets found and plugin name not provided; either set the \
         PLUGIN_AWS_KEY, PLUGIN_AWS_SECRET, PLUGIN_AWS_BUCKET and PLUGIN_AWS_REGION \
         environment variables, create a secrets.json file, or provide a plugin name \
         for API fetch"
    )]
    NoSource,
}

fn format_network_error(endpoint: &str, status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("API error {code} from '{endpoint}': {message}"),
        None => format!("failed to fetch plugin secrets from '{endpoint}': {message}"),
    }
}
