//! ECDSA signing and verification over secp256k1.

use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};

use super::error::CryptoError;
use super::Keypair;

/// Signs a 32-byte message digest, returning the DER-serialized signature.
///
/// The digest must be exactly 32 bytes; anything else fails with
/// [`CryptoError::CurveOperation`].
pub fn sign(message_digest: &[u8], keypair: &Keypair) -> Result<Vec<u8>, CryptoError> {
    let secp = Secp256k1::new();
    let message = Message::from_digest_slice(message_digest)?;
    let secret_key = SecretKey::from_slice(keypair.private_key_bytes())?;

    let signature = secp.sign_ecdsa(&message, &secret_key);
    Ok(signature.serialize_der().to_vec())
}

/// Verifies a DER signature over a 32-byte message digest.
///
/// Malformed input (digest length, DER bytes, public key encoding) is an
/// error; a well-formed signature that does not match the key returns
/// `Ok(false)`.
pub fn verify(
    message_digest: &[u8],
    signature_der: &[u8],
    public_key: &[u8],
) -> Result<bool, CryptoError> {
    let secp = Secp256k1::new();
    let message = Message::from_digest_slice(message_digest)?;
    let signature = Signature::from_der(signature_der)?;
    let public_key = PublicKey::from_slice(public_key)?;

    Ok(secp.verify_ecdsa(&message, &signature, &public_key).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::digest::sha256;

    fn test_keypair(last_byte: u8) -> Keypair {
        let mut secret = [0u8; 32];
        secret[31] = last_byte;
        Keypair::from_secret_bytes(secret).unwrap()
    }

    #[test]
    fn test_sign_verify_round_trip() {
        let keypair = test_keypair(0x42);
        let digest = sha256("a signed message");

        let signature = sign(&digest, &keypair).unwrap();
        let valid = verify(&digest, &signature, keypair.public_key_bytes()).unwrap();
        assert!(valid);
    }

    #[test]
    fn test_wrong_key_does_not_verify() {
        let signer = test_keypair(0x42);
        let other = test_keypair(0x43);
        let digest = sha256("a signed message");

        let signature = sign(&digest, &signer).unwrap();
        let valid = verify(&digest, &signature, other.public_key_bytes()).unwrap();
        assert!(!valid);
    }

    #[test]
    fn test_wrong_digest_does_not_verify() {
        let keypair = test_keypair(0x42);
        let signature = sign(&sha256("original"), &keypair).unwrap();

        let valid = verify(&sha256("tampered"), &signature, keypair.public_key_bytes()).unwrap();
        assert!(!valid);
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        let keypair = test_keypair(0x42);
        let digest = sha256("a signed message");
        let signature = sign(&digest, &keypair).unwrap();

        // Digest of the wrong length.
        assert!(matches!(
            sign(&digest[..16], &keypair),
            Err(CryptoError::CurveOperation(_))
        ));

        // Garbage DER bytes.
        assert!(matches!(
            verify(&digest, &[0u8; 4], keypair.public_key_bytes()),
            Err(CryptoError::CurveOperation(_))
        ));

        // Truncated public key.
        assert!(matches!(
            verify(&digest, &signature, &keypair.public_key_bytes()[..10]),
            Err(CryptoError::CurveOperation(_))
        ));
    }
}
