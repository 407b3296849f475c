//! Single-slot cache of decrypted, validated credentials.
//!
//! The cache is an explicit object: callers construct one and share it
//! (usually behind an `Arc`) with whatever needs secrets. The slot starts
//! empty, is filled by the first successful resolution and then only changes
//! through [`SecretsCache::clear`].
//!
//! The slot lock is held across decrypt and validate, so concurrent first
//! callers are serialised and only one of them runs the codec.

use beeutil_core::{CredentialsRecord, EncryptedBlob, Result};
use parking_lot::Mutex;

use crate::envelope::{AesCbcEnvelope, EnvelopeCodec};
use crate::validate::validate;

pub struct SecretsCache {
    codec: Box<dyn EnvelopeCodec>,
    slot: Mutex<Option<CredentialsRecord>>,
}

impl SecretsCache {
    /// Create an empty cache using the AES-256-CBC envelope
    pub fn new() -> Self {
        Self::with_codec(Box::new(AesCbcEnvelope))
    }

    /// Create an empty cache with a custom codec
    pub fn with_codec(codec: Box<dyn EnvelopeCodec>) -> Self {
        Self {
            codec,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached record, or decrypt and validate `blob` and cache it.
    ///
    /// When the slot is already populated the codec and validator are not
    /// touched and the arguments are ignored. On any failure the slot stays
    /// empty.
    pub fn get_or_decrypt(
        &self,
        plugin_id: &str,
        blob: &EncryptedBlob,
    ) -> Result<CredentialsRecord> {
        let mut slot = self.slot.lock();
        if let Some(record) = slot.as_ref() {
            tracing::trace!("Secrets cache hit");
            return Ok(record.clone());
        }

        let record = self.codec.decrypt(plugin_id, blob)?;
        validate(&record)?;

        tracing::debug!(plugin_id = %plugin_id, "Cached decrypted secrets");
        *slot = Some(record.clone());
        Ok(record)
    }

    /// Validate `record` and place it in an empty slot.
    ///
    /// If the slot is already populated the existing record wins and is
    /// returned.
    pub fn store(&self, record: CredentialsRecord) -> Result<CredentialsRecord> {
        validate(&record)?;

        let mut slot = self.slot.lock();
        match slot.as_ref() {
            Some(existing) => Ok(existing.clone()),
            None => {
                *slot = Some(record.clone());
                Ok(record)
            }
        }
    }

    /// Current record, if any
    pub fn get(&self) -> Option<CredentialsRecord> {
        self.slot.lock().clone()
    }

    pub fn is_populated(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Empty the slot unconditionally
    pub fn clear(&self) {
        if self.slot.lock().take().is_some() {
            tracing::debug!("Cleared secrets cache");
        }
    }
}

impl Default for SecretsCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SecretsCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretsCache")
            .field("populated", &self.is_populated())
            .finish()
    }
}
