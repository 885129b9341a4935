//! Symmetric encryption of short strings with a shared base64 key.
//!
//! Content is encrypted with AES in ECB mode with PKCS#7 padding and the
//! ciphertext is carried as standard base64. The key length selects the AES
//! variant: 16, 24 or 32 bytes for AES-128, AES-192 or AES-256.
//!
//! ECB leaks equal plaintext blocks. It is kept for compatibility with
//! ciphertexts already stored by other loadup services; do not pick it for
//! new data.
//!
//! # Example
//! ```
//! use loadup_common_util::crypto::{decrypt, encrypt, generate_key};
//!
//! let key = generate_key(128).unwrap();
//! let secret = encrypt("hello", &key).unwrap();
//! assert_eq!(decrypt(&secret, &key).unwrap(), "hello");
//! ```

mod error;

pub use error::*;

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::Rng;
use tracing::instrument;

type Result<T> = core::result::Result<T, CryptoError>;

/// Encrypts `content` with the base64 encoded `key` and returns base64
/// ciphertext.
#[instrument(level = "trace", skip_all)]
pub fn encrypt(content: &str, key: &str) -> Result<String> {
    let key = STANDARD.decode(key)?;
    let plain = content.as_bytes();
    let cipher = match key.len() {
        16 => ecb::Encryptor::<Aes128>::new_from_slice(&key)
            .map(|c| c.encrypt_padded_vec_mut::<Pkcs7>(plain)),
        24 => ecb::Encryptor::<Aes192>::new_from_slice(&key)
            .map(|c| c.encrypt_padded_vec_mut::<Pkcs7>(plain)),
        32 => ecb::Encryptor::<Aes256>::new_from_slice(&key)
            .map(|c| c.encrypt_padded_vec_mut::<Pkcs7>(plain)),
        len => return Err(CryptoError::InvalidKeyLength(len)),
    }
    .map_err(|_| CryptoError::InvalidKeyLength(key.len()))?;
    Ok(STANDARD.encode(cipher))
}

/// Decrypts base64 ciphertext produced by [`encrypt`] with the same key.
#[instrument(level = "trace", skip_all)]
pub fn decrypt(content: &str, key: &str) -> Result<String> {
    let key = STANDARD.decode(key)?;
    let cipher = STANDARD.decode(content)?;
    let plain = match key.len() {
        16 => ecb::Decryptor::<Aes128>::new_from_slice(&key)
            .map(|c| c.decrypt_padded_vec_mut::<Pkcs7>(&cipher)),
        24 => ecb::Decryptor::<Aes192>::new_from_slice(&key)
            .map(|c| c.decrypt_padded_vec_mut::<Pkcs7>(&cipher)),
        32 => ecb::Decryptor::<Aes256>::new_from_slice(&key)
            .map(|c| c.decrypt_padded_vec_mut::<Pkcs7>(&cipher)),
        len => return Err(CryptoError::InvalidKeyLength(len)),
    }
    .map_err(|_| CryptoError::InvalidKeyLength(key.len()))?
    .map_err(|_| CryptoError::Padding)?;
    Ok(String::from_utf8(plain)?)
}

/// Generates a random base64 key of `bits` (128, 192 or 256).
pub fn generate_key(bits: usize) -> Result<String> {
    let len = bits / 8;
    if bits % 8 != 0 || !matches!(len, 16 | 24 | 32) {
        return Err(CryptoError::InvalidKeyLength(len));
    }
    let mut key = vec![0u8; len];
    rand::rng().fill(key.as_mut_slice());
    Ok(STANDARD.encode(key))
}
