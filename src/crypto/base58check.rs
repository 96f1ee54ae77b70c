//! Base58Check encoding and decoding.
//!
//! A Base58Check string is `base58(version || payload || checksum)` where
//! the checksum is the first four bytes of the double SHA-256 of
//! `version || payload`. Leading zero bytes become leading `'1'`
//! characters. Decoding verifies the checksum and surfaces a mismatch
//! instead of correcting it.

use super::digest::sha256d;
use super::error::CryptoError;

/// Length of the trailing checksum in bytes.
const CHECKSUM_LEN: usize = 4;

/// A verified Base58Check payload split back into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The leading version byte.
    pub version: u8,
    /// The payload between version byte and checksum.
    pub payload: Vec<u8>,
}

/// Encodes a payload under the given version byte.
pub fn encode(payload: &[u8], version: u8) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    data.push(version);
    data.extend_from_slice(payload);

    let checksum = sha256d(&data);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);

    bs58::encode(data).into_string()
}

/// Decodes a Base58Check string, verifying its checksum.
///
/// Fails with [`CryptoError::ChecksumMismatch`] when the trailing four
/// bytes do not match the recomputed double hash of the rest.
pub fn decode(encoded: &str) -> Result<Decoded, CryptoError> {
    let data = bs58::decode(encoded).into_vec()?;

    if data.len() < 1 + CHECKSUM_LEN {
        return Err(CryptoError::TruncatedPayload(data.len()));
    }

    let (body, checksum) = data.split_at(data.len() - CHECKSUM_LEN);
    let expected = sha256d(body);
    if checksum != &expected[..CHECKSUM_LEN] {
        return Err(CryptoError::ChecksumMismatch);
    }

    Ok(Decoded {
        version: body[0],
        payload: body[1..].to_vec(),
    })
}
