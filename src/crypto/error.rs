//! Error types for the crypto layer.

use thiserror::Error;

/// Failures surfaced by key generation, derivation, and encoding.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The OS entropy source is unavailable or failed mid-read.
    #[error("Entropy source failure: {0}")]
    EntropySource(#[from] rand::Error),

    /// The entropy source kept producing out-of-range scalars.
    ///
    /// A draw from a healthy CSPRNG is rejected with probability around
    /// 2^-128, so hitting this cap means the source is broken.
    #[error("Entropy source produced {0} consecutive invalid scalars")]
    EntropyExhausted(u32),

    /// A candidate private key is zero or not below the curve order.
    #[error("Private key is not a valid secp256k1 scalar")]
    InvalidScalar,

    /// The curve library rejected an input (key, digest, or signature).
    #[error("Curve operation failed: {0}")]
    CurveOperation(#[from] secp256k1::Error),

    /// The input is not valid base58.
    #[error("Invalid base58 string: {0}")]
    InvalidBase58(#[from] bs58::decode::Error),

    /// A decoded payload is too short to hold a version byte and checksum.
    #[error("Decoded payload too short: {0} bytes")]
    TruncatedPayload(usize),

    /// The trailing four checksum bytes do not match the payload.
    #[error("Base58Check checksum mismatch")]
    ChecksumMismatch,
}
