//! Cryptographic operations for Bitcoin key and address generation.
//!
//! This module provides:
//! - Secure random key generation using secp256k1
//! - Legacy address derivation via SHA-256 and RIPEMD-160
//! - Base58Check encoding of addresses and exported private keys
//! - ECDSA signing and verification

mod address;
pub mod base58check;
mod bundle;
pub mod digest;
mod error;
mod keypair;
mod signature;

pub use address::{Address, ADDRESS_VERSION};
pub use bundle::{
    bundle_from_keypair, generate_address_components, KeyPairBundle, WifEncoding, Wifs,
    WIF_VERSION,
};
pub use digest::hash_hex;
pub use error::CryptoError;
pub use keypair::{is_valid_scalar, Keypair, CURVE_ORDER};
pub use signature::{sign, verify};
