use thiserror::Error;

/// Errors raised by the AES helpers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// The decoded key is not 16, 24 or 32 bytes long.
    #[error("invalid AES key length: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeyLength(usize),

    /// The key or the ciphertext is not valid base64.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decryption produced bad padding: wrong key or corrupted ciphertext.
    #[error("decryption failed: bad padding")]
    Padding,

    /// The decrypted bytes are not UTF-8.
    #[error("decrypted content is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
