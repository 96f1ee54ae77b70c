//! # btc_keygen
//!
//! Bitcoin key pair and legacy address generator.
//!
//! ## Architecture
//!
//! - `crypto`: Key generation, address derivation and Base58Check encoding
//! - `config`: Runtime configuration

pub mod config;
pub mod crypto;

pub use config::Config;
pub use crypto::{
    bundle_from_keypair, generate_address_components, hash_hex, is_valid_scalar, sign, verify,
    Address, CryptoError, KeyPairBundle, Keypair, WifEncoding, Wifs,
};
