//! Per-plugin key derivation.
//!
//! The AES key for a plugin's credentials is PBKDF2-HMAC-SHA256 over the
//! plugin identifier with a salt shared by every plugin. The salt and round
//! count are fixed by the issuing service; changing either makes existing
//! blobs undecryptable.

use beeutil_core::constants::{KDF_ITERATIONS, KDF_SALT, KEY_LENGTH};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

/// Derive the 256-bit AES key for `plugin_id`.
///
/// Pure and deterministic; safe to call concurrently.
pub fn derive_key(plugin_id: &str) -> Zeroizing<[u8; KEY_LENGTH]> {
    stretch(plugin_id.as_bytes(), KDF_SALT, KDF_ITERATIONS)
}

fn stretch(input: &[u8], salt: &[u8], rounds: u32) -> Zeroizing<[u8; KEY_LENGTH]> {
    let mut key = Zeroizing::new([0u8; KEY_LENGTH]);
    pbkdf2_hmac::<Sha256>(input, salt, rounds, &mut key[..]);
    key
}
