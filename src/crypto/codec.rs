//! Hex and hashing helpers shared by key derivation and address formatting.

use tiny_keccak::{Hasher, Keccak};

use crate::error::Result;

/// Removes a leading `0x` or `0X` if present.
#[inline]
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decodes a hex private key (optional `0x` prefix) into exactly 32 bytes.
///
/// Fails with `InvalidKeyFormat` on odd length, wrong length or non-hex
/// characters. Range checking is left to the caller.
pub fn decode_private_key(key: &str) -> Result<[u8; 32]> {
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(strip_hex_prefix(key), &mut bytes)?;
    Ok(bytes)
}

/// Encodes a 65-byte uncompressed point as 128 hex characters, dropping the
/// leading `0x04` marker.
pub fn encode_public_key(uncompressed: &[u8; 65]) -> String {
    hex::encode(&uncompressed[1..])
}

/// Keccak-256 digest of `data`.
#[inline]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);

    let mut hash = [0u8; 32];
    hasher.finalize(&mut hash);
    hash
}
