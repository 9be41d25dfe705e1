//! Hash related utils.

use hmac::Hmac;
use hmac::Mac;
use md5::Md5;
use sha2::Digest;
use sha2::Sha256;

/// Hex encoded MD5 hash.
///
/// Use this function instead of `hex::encode(md5(content))` can reduce
/// extra copy.
pub fn hex_md5(content: &[u8]) -> String {
    hex::encode(Md5::digest(content).as_slice())
}

/// Hex encoded HMAC with SHA256 hash.
///
/// Use this function instead of `hex::encode(hmac_sha256(key, content))` can
/// reduce extra copy.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}
