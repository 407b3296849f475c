//! Builder and classification methods for secrets errors

use super::types::SecretsError;

impl SecretsError {
    /// Create a decryption error
    #[must_use]
    pub fn decryption(message: impl Into<String>) -> Self {
        SecretsError::Decryption {
            message: message.into(),
        }
    }

    /// Create an encryption error
    #[must_use]
    pub fn encryption(message: impl Into<String>) -> Self {
        SecretsError::Encryption {
            message: message.into(),
        }
    }

    /// Create a validation error listing every missing field
    #[must_use]
    pub fn validation<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SecretsError::Validation {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a transport-level network error
    #[must_use]
    pub fn network(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        SecretsError::Network {
            endpoint: endpoint.into(),
            status: None,
            message: message.into(),
        }
    }

    /// Create a network error for an unexpected HTTP status
    #[must_use]
    pub fn http_status(
        endpoint: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        SecretsError::Network {
            endpoint: endpoint.into(),
            status: Some(status),
            message: message.into(),
        }
    }

    /// Create a not-found error
    #[must_use]
    pub fn not_found(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        SecretsError::NotFound {
            plugin: plugin.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_decryption(&self) -> bool {
        matches!(self, SecretsError::Decryption { .. })
    }

    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, SecretsError::Validation { .. })
    }

    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, SecretsError::Network { .. })
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, SecretsError::NotFound { .. })
    }

    #[must_use]
    pub fn is_no_source(&self) -> bool {
        matches!(self, SecretsError::NoSource)
    }

    /// HTTP status carried by a network error, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            SecretsError::Network { status, .. } => *status,
            _ => None,
        }
    }

    /// Missing field names carried by a validation error
    #[must_use]
    pub fn missing_fields(&self) -> &[String] {
        match self {
            SecretsError::Validation { missing } => missing,
            _ => &[],
        }
    }
}
