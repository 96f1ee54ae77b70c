//! Hash primitives used by the address and encoding pipelines.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Computes SHA-256 over raw bytes.
#[inline]
pub fn sha256(data: impl AsRef<[u8]>) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Computes SHA-256 of SHA-256, raw bytes in and out.
///
/// This is the checksum primitive: Base58Check takes the first four bytes
/// of this digest, and the chaining must stay on raw bytes to remain
/// interoperable with other encoders.
#[inline]
pub fn sha256d(data: impl AsRef<[u8]>) -> [u8; 32] {
    sha256(sha256(data))
}

/// Computes RIPEMD-160 over raw bytes.
#[inline]
pub fn ripemd160(data: impl AsRef<[u8]>) -> [u8; 20] {
    Ripemd160::digest(data).into()
}

/// Computes SHA-256 and returns it as lowercase hex text.
#[inline]
pub fn hash_hex(data: impl AsRef<[u8]>) -> String {
    hex::encode(sha256(data))
}

/// Computes the double hash in its hex-text form: `hash_hex(hash_hex(x))`.
///
/// The second pass hashes the hex *text* of the first digest, not its raw
/// bytes. Checksums use [`sha256d`] instead.
#[inline]
pub fn double_hash_hex(data: impl AsRef<[u8]>) -> String {
    hash_hex(hash_hex(data))
}
