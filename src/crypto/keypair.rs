//! Bitcoin keypair generation.

use rand::rngs::OsRng;
use rand::RngCore;
use secp256k1::{PublicKey, Secp256k1, SecretKey};

use super::error::CryptoError;
use super::Address;

/// The secp256k1 group order `n`, big-endian.
///
/// Valid private keys lie in `[1, n - 1]`.
pub const CURVE_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
    0x41, 0x41,
];

/// Retry cap for rejection sampling. A single draw is rejected with
/// probability around 2^-128, so reaching the cap means the entropy
/// source is not producing uniform bytes.
const MAX_SAMPLE_ATTEMPTS: u32 = 1000;

/// Returns whether `candidate`, read as a big-endian integer, is a valid
/// secp256k1 private key: nonzero and strictly below the group order.
#[inline]
pub fn is_valid_scalar(candidate: &[u8; 32]) -> bool {
    candidate.iter().any(|&b| b != 0) && *candidate < CURVE_ORDER
}

/// Represents a Bitcoin keypair (private key + compressed public key).
#[derive(Debug, Clone)]
pub struct Keypair {
    /// The private key bytes (32 bytes)
    secret_key: [u8; 32],
    /// The SEC1 compressed public key (33 bytes)
    public_key: [u8; 33],
}

impl Keypair {
    /// Generates a new random keypair.
    ///
    /// Draws 32 bytes from the OS entropy source and resamples until the
    /// candidate is a valid curve scalar. An unavailable entropy source
    /// surfaces as [`CryptoError::EntropySource`]; exhausting the retry
    /// cap surfaces as [`CryptoError::EntropyExhausted`].
    pub fn generate() -> Result<Self, CryptoError> {
        let mut candidate = [0u8; 32];
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            OsRng.try_fill_bytes(&mut candidate)?;
            if is_valid_scalar(&candidate) {
                return Self::from_secret_bytes(candidate);
            }
        }
        Err(CryptoError::EntropyExhausted(MAX_SAMPLE_ATTEMPTS))
    }

    /// Builds a keypair from existing secret bytes.
    ///
    /// The scalar is range-checked here rather than left to the curve
    /// library, so an out-of-range key fails with
    /// [`CryptoError::InvalidScalar`] before any curve call.
    pub fn from_secret_bytes(secret_bytes: [u8; 32]) -> Result<Self, CryptoError> {
        if !is_valid_scalar(&secret_bytes) {
            return Err(CryptoError::InvalidScalar);
        }

        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_slice(&secret_bytes)?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);

        Ok(Self {
            secret_key: secret_bytes,
            public_key: public_key.serialize(),
        })
    }

    /// Returns the private key as a hex string.
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.secret_key)
    }

    /// Returns the private key bytes.
    pub fn private_key_bytes(&self) -> &[u8; 32] {
        &self.secret_key
    }

    /// Returns the compressed public key bytes (parity prefix + x).
    pub fn public_key_bytes(&self) -> &[u8; 33] {
        &self.public_key
    }

    /// Returns the compressed public key as a hex string.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key)
    }

    /// Derives the address for this keypair.
    #[inline]
    pub fn address(&self) -> Address {
        Address::from_public_key_hex(&self.public_key_hex())
    }
}
