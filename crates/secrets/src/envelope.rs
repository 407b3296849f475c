//! Envelope encryption of credentials records.
//!
//! Wire format (outer base64 of UTF-8 JSON):
//!
//! ```text
//! base64({"iv": "<base64 16 bytes>", "ciphertext": "<base64 n*16 bytes>"})
//! ```
//!
//! The plaintext is the JSON object form of the record, PKCS#7 padded and
//! encrypted with AES-256-CBC under the key from [`derive_key`]. There is no
//! authentication tag; padding validity is the only structural check on
//! decrypt, so a wrong key is reported as a decryption error rather than
//! detected up front.

use base64::{engine::general_purpose::STANDARD, Engine};
use beeutil_core::constants::{BLOCK_SIZE, IV_LENGTH};
use beeutil_core::{CredentialsRecord, EncryptedBlob, Result, SecretsError};
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::kdf::derive_key;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Encrypts and decrypts credentials records for a plugin
pub trait EnvelopeCodec: Send + Sync {
    fn encrypt(&self, plugin_id: &str, record: &CredentialsRecord) -> Result<EncryptedBlob>;

    fn decrypt(&self, plugin_id: &str, blob: &EncryptedBlob) -> Result<CredentialsRecord>;
}

/// The AES-256-CBC envelope shared with the plugin service
#[derive(Debug, Clone, Copy, Default)]
pub struct AesCbcEnvelope;

impl EnvelopeCodec for AesCbcEnvelope {
    fn encrypt(&self, plugin_id: &str, record: &CredentialsRecord) -> Result<EncryptedBlob> {
        encrypt(plugin_id, record)
    }

    fn decrypt(&self, plugin_id: &str, blob: &EncryptedBlob) -> Result<CredentialsRecord> {
        decrypt(plugin_id, blob)
    }
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    iv: String,
    ciphertext: String,
}

/// Encrypt `record` for `plugin_id`.
///
/// Every call draws a fresh IV from the OS RNG, so encrypting the same record
/// twice yields different blobs.
pub fn encrypt(plugin_id: &str, record: &CredentialsRecord) -> Result<EncryptedBlob> {
    let key = derive_key(plugin_id);

    let mut iv = [0u8; IV_LENGTH];
    OsRng.fill_bytes(&mut iv);

    let plaintext = Zeroizing::new(
        serde_json::to_vec(record)
            .map_err(|e| SecretsError::encryption(format!("failed to serialize record: {e}")))?,
    );

    let ciphertext = Aes256CbcEnc::new_from_slices(&key[..], &iv)
        .map_err(|e| SecretsError::encryption(format!("invalid key or IV length: {e}")))?
        .encrypt_padded_vec_mut::<Pkcs7>(&plaintext);

    let envelope = Envelope {
        iv: STANDARD.encode(iv),
        ciphertext: STANDARD.encode(ciphertext),
    };
    let inner = serde_json::to_vec(&envelope)
        .map_err(|e| SecretsError::encryption(format!("failed to serialize envelope: {e}")))?;

    tracing::debug!(plugin_id = %plugin_id, fields = record.len(), "Encrypted credentials record");
    Ok(EncryptedBlob::new(STANDARD.encode(inner)))
}

/// Decrypt `blob` with the key derived from `plugin_id`.
///
/// Every failure, structural or cryptographic, is a [`SecretsError::Decryption`].
pub fn decrypt(plugin_id: &str, blob: &EncryptedBlob) -> Result<CredentialsRecord> {
    let (iv, ciphertext) = open_envelope(blob)?;

    let key = derive_key(plugin_id);
    let plaintext = Zeroizing::new(
        Aes256CbcDec::new_from_slices(&key[..], &iv)
            .map_err(|e| SecretsError::decryption(format!("invalid key or IV length: {e}")))?
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .map_err(|_| {
                SecretsError::decryption("invalid padding (wrong plugin id or corrupted ciphertext)")
            })?,
    );

    let record: CredentialsRecord = serde_json::from_slice(&plaintext)
        .map_err(|e| SecretsError::decryption(format!("decrypted payload is not a record: {e}")))?;

    tracing::debug!(plugin_id = %plugin_id, fields = record.len(), "Decrypted credentials record");
    Ok(record)
}

/// Peel the outer encodings off a blob, returning the raw IV and ciphertext
fn open_envelope(blob: &EncryptedBlob) -> Result<(Vec<u8>, Vec<u8>)> {
    let inner = STANDARD
        .decode(blob.as_str().trim())
        .map_err(|e| SecretsError::decryption(format!("malformed encrypted blob: {e}")))?;

    let envelope: Envelope = serde_json::from_slice(&inner)
        .map_err(|e| SecretsError::decryption(format!("malformed encrypted blob: {e}")))?;

    let iv = STANDARD
        .decode(&envelope.iv)
        .map_err(|e| SecretsError::decryption(format!("malformed IV: {e}")))?;
    if iv.len() != IV_LENGTH {
        return Err(SecretsError::decryption(format!(
            "IV must be {IV_LENGTH} bytes, got {}",
            iv.len()
        )));
    }

    let ciphertext = STANDARD
        .decode(&envelope.ciphertext)
        .map_err(|e| SecretsError::decryption(format!("malformed ciphertext: {e}")))?;
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(SecretsError::decryption(format!(
            "ciphertext length {} is not a positive multiple of {BLOCK_SIZE}",
            ciphertext.len()
        )));
    }

    Ok((iv, ciphertext))
}
