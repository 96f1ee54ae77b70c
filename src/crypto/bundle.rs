//! Key pair bundle assembly.

use std::fmt;

use super::address::ADDRESS_VERSION;
use super::base58check;
use super::error::CryptoError;
use super::Keypair;

/// Version byte for wallet-import-format private keys.
pub const WIF_VERSION: u8 = 0x80;

/// A Base58Check encoding slot that may not have a defined encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WifEncoding {
    /// A finished Base58Check encoding.
    Encoded(String),
    /// No encoding is defined for this slot.
    NotImplemented,
}

impl fmt::Display for WifEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WifEncoding::Encoded(s) => write!(f, "{}", s),
            WifEncoding::NotImplemented => write!(f, "<not implemented>"),
        }
    }
}

/// Wallet-import-format encodings of a key pair.
#[derive(Debug, Clone)]
pub struct Wifs {
    /// Base58Check private key, version prefix 0x80
    pub private_key: String,
    /// Public key slot, see [`bundle_from_keypair`]
    pub public_key: WifEncoding,
}

/// Everything derived from one generated key pair.
#[derive(Debug, Clone)]
pub struct KeyPairBundle {
    /// Compressed public key, hex
    pub public_key: String,
    /// Raw 32-byte private scalar, hex
    pub private_key: String,
    /// Wallet-import-format encodings
    pub wifs: Wifs,
    /// Legacy Base58Check address
    pub address: String,
}

/// Generates a fresh key pair and derives its address components.
pub fn generate_address_components() -> Result<KeyPairBundle, CryptoError> {
    Ok(bundle_from_keypair(&Keypair::generate()?))
}

/// Derives the full component bundle from an existing key pair.
pub fn bundle_from_keypair(keypair: &Keypair) -> KeyPairBundle {
    let address = keypair.address().to_base58check(ADDRESS_VERSION);
    let private_wif = base58check::encode(keypair.private_key_bytes(), WIF_VERSION);

    KeyPairBundle {
        public_key: keypair.public_key_hex(),
        private_key: keypair.private_key_hex(),
        wifs: Wifs {
            private_key: private_wif,
            // TODO: no version prefix or serialization is defined for a
            // public-key WIF in this scheme; encode it once one is settled.
            public_key: WifEncoding::NotImplemented,
        },
        address,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::crypto::base58check::decode;

    fn fixed_keypair() -> Keypair {
        let mut secret = [0u8; 32];
        secret[31] = 0x01;
        Keypair::from_secret_bytes(secret).unwrap()
    }

    #[test]
    fn test_fixed_key_bundle() {
        let bundle = bundle_from_keypair(&fixed_keypair());

        assert_eq!(
            bundle.public_key,
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d9959f2815b16f81798"
        );
        assert_eq!(
            bundle.private_key,
            "0000000000000000000000000000000000000000000000000000000000000001"
        );
        // Well-known WIF of private key 1.
        assert_eq!(
            bundle.wifs.private_key,
            "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf"
        );
        assert_eq!(bundle.wifs.public_key, WifEncoding::NotImplemented);
    }

    #[test]
    fn test_wif_decodes_back_to_secret() {
        let keypair = fixed_keypair();
        let bundle = bundle_from_keypair(&keypair);

        let decoded = decode(&bundle.wifs.private_key).unwrap();
        assert_eq!(decoded.version, WIF_VERSION);
        assert_eq!(decoded.payload, keypair.private_key_bytes());
    }

    #[test]
    fn test_address_decodes_back_to_digest() {
        let keypair = fixed_keypair();
        let bundle = bundle_from_keypair(&keypair);

        let decoded = decode(&bundle.address).unwrap();
        assert_eq!(decoded.version, ADDRESS_VERSION);
        assert_eq!(decoded.payload, keypair.address().as_bytes());
    }

    #[test]
    fn test_generated_bundles_are_consistent() {
        let bundle = generate_address_components().unwrap();

        assert_eq!(bundle.private_key.len(), 64);
        assert_eq!(bundle.public_key.len(), 66);
        assert!(decode(&bundle.address).is_ok());
        assert!(decode(&bundle.wifs.private_key).is_ok());
    }

    #[test]
    fn test_generated_keys_are_unique() {
        // Birthday-bound sanity check, not a proof of randomness quality.
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let bundle = generate_address_components().unwrap();
            assert!(seen.insert(bundle.private_key));
        }
    }
}
