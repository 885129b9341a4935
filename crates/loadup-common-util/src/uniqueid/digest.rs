/// A deterministic one-way hash applied to IDs by
/// [`UniqueId::next_id_hash`].
///
/// Each call hashes with a fresh context, so implementations are shared
/// between threads without locking.
///
/// [`UniqueId::next_id_hash`]: crate::uniqueid::UniqueId::next_id_hash
pub trait IdDigest: Send + Sync {
    /// Hashes `input` into a fixed-length byte string.
    fn digest(&self, input: &[u8]) -> Vec<u8>;
}

/// 128-bit MD5 digest; hashed IDs are 32 hex characters.
#[cfg(feature = "md5")]
#[derive(Clone, Copy, Debug, Default)]
pub struct Md5Digest;

#[cfg(feature = "md5")]
impl IdDigest for Md5Digest {
    fn digest(&self, input: &[u8]) -> Vec<u8> {
        use md5::{Digest, Md5};
        Md5::digest(input).to_vec()
    }
}

/// The digest enabled by this build's features, if any.
#[must_use]
pub fn default_digest() -> Option<Box<dyn IdDigest>> {
    #[cfg(feature = "md5")]
    {
        Some(Box::new(Md5Digest))
    }
    #[cfg(not(feature = "md5"))]
    {
        tracing::debug!("no digest compiled in, hashed IDs fall back to plain IDs");
        None
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Renders bytes as lowercase hex, two characters per byte.
///
/// ```
/// use loadup_common_util::uniqueid::encode_hex;
///
/// assert_eq!(encode_hex(&[0x00, 0x7f, 0xab]), "007fab");
/// ```
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }
    out
}

#[cfg(all(test, feature = "md5"))]
mod tests {
    use super::*;

    #[test]
    fn md5_known_vector() {
        let hex = encode_hex(&Md5Digest.digest(b"abc"));
        assert_eq!(hex, "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn md5_is_deterministic() {
        let input = b"1735689600001-4242-10.0.0.7-3";
        assert_eq!(Md5Digest.digest(input), Md5Digest.digest(input));
        assert_eq!(Md5Digest.digest(input).len(), 16);
    }
}
