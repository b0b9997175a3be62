//! RSA-2048 PKCS#1 v1.5 signature verification over SHA-256 digests.
use super::{
    bigint::{self, BigInt},
    sha256::{self, Digest, DIGEST_SIZE},
};

/// Byte width of an RSA-2048 modulus, and therefore of its signatures.
pub const MODULUS_SIZE: usize = 256;

/// ASN.1 DigestInfo header identifying a SHA-256 digest.
pub const SHA256_DIGEST_INFO: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01, 0x05,
    0x00, 0x04, 0x20,
];

/// The separator may not appear before this index, which enforces at least
/// eight bytes of `0xFF` padding.
const MIN_SEPARATOR_INDEX: usize = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Well formed signature over a different digest.
    InvalidSignature,
    /// The decrypted block is not a PKCS#1 v1.5 SHA-256 encoding.
    Padding,
    /// Empty message, or signature and modulus of different widths.
    InvalidInput,
    Arithmetic(bigint::Error),
}

impl From<bigint::Error> for Error {
    fn from(error: bigint::Error) -> Self { Error::Arithmetic(error) }
}

/// Big-endian public modulus and exponent.
#[derive(Debug, Copy, Clone)]
pub struct PublicKey<'a> {
    pub modulus: &'a [u8],
    pub exponent: u32,
}

/// Verifies `signature` against the SHA-256 digest of `message`.
pub fn verify_signature(message: &[u8], signature: &[u8], key: &PublicKey) -> Result<(), Error> {
    if message.is_empty() {
        return Err(Error::InvalidInput);
    }
    verify_digest(&sha256::hash(message), signature, key)
}

/// Verifies `signature` against an already computed digest. This is the
/// entry point for images that are hashed in place as they are read from
/// flash.
pub fn verify_digest(digest: &Digest, signature: &[u8], key: &PublicKey) -> Result<(), Error> {
    let width = key.modulus.len();
    if width == 0 || signature.len() != width || width > bigint::MAX_BYTES / 2 {
        return Err(Error::InvalidInput);
    }

    let modulus = BigInt::from_bytes(key.modulus)?;
    let signature = BigInt::from_bytes(signature)?;
    let exponent = BigInt::from_u32(key.exponent);

    let decrypted = signature.mod_exp(&exponent, &modulus)?;
    let mut encoded = [0u8; bigint::MAX_BYTES / 2];
    let encoded = &mut encoded[..width];
    decrypted.to_bytes(encoded)?;

    let embedded = embedded_digest(encoded)?;
    if constant_time_eq(embedded, digest) {
        Ok(())
    } else {
        Err(Error::InvalidSignature)
    }
}

/// Checks the `00 01 FF.. 00 DigestInfo digest` structure and returns the digest.
fn embedded_digest(encoded: &[u8]) -> Result<&[u8], Error> {
    if encoded.len() < MIN_SEPARATOR_INDEX + 1 + SHA256_DIGEST_INFO.len() + DIGEST_SIZE {
        return Err(Error::Padding);
    }
    if encoded[0] != 0x00 || encoded[1] != 0x01 {
        return Err(Error::Padding);
    }

    let padding_length = encoded[2..].iter().take_while(|&&b| b == 0xFF).count();
    let separator = 2 + padding_length;
    if separator < MIN_SEPARATOR_INDEX || encoded.get(separator) != Some(&0x00) {
        return Err(Error::Padding);
    }

    let payload = &encoded[separator + 1..];
    if payload.len() != SHA256_DIGEST_INFO.len() + DIGEST_SIZE {
        return Err(Error::Padding);
    }
    let (header, digest) = payload.split_at(SHA256_DIGEST_INFO.len());
    if header != SHA256_DIGEST_INFO {
        return Err(Error::Padding);
    }
    Ok(digest)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::crypto::test_vectors::*;

    const KEY: PublicKey<'static> = PublicKey { modulus: &MODULUS, exponent: EXPONENT };

    #[test]
    fn valid_signature_verifies() {
        assert_eq!(verify_signature(&firmware(), &FIRMWARE_SIGNATURE, &KEY), Ok(()));
        assert_eq!(verify_digest(&FIRMWARE_DIGEST, &FIRMWARE_SIGNATURE, &KEY), Ok(()));
    }

    #[test]
    fn any_flipped_message_bit_invalidates_signature() {
        // Given
        let mut image = firmware();

        for (index, bit) in [(0usize, 0u8), (511, 4), (1023, 7)] {
            // When
            image[index] ^= 1 << bit;

            // Then
            assert_eq!(
                verify_signature(&image, &FIRMWARE_SIGNATURE, &KEY),
                Err(Error::InvalidSignature)
            );
            image[index] ^= 1 << bit;
        }
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let mut signature = FIRMWARE_SIGNATURE;
        signature[128] ^= 0x01;
        assert!(verify_signature(&firmware(), &signature, &KEY).is_err());
    }

    #[test]
    fn short_padding_is_a_padding_error() {
        assert_eq!(
            verify_signature(&firmware(), &SHORT_PADDING_SIGNATURE, &KEY),
            Err(Error::Padding)
        );
    }

    #[test]
    fn foreign_digest_info_is_a_padding_error() {
        assert_eq!(
            verify_signature(&firmware(), &WRONG_PREFIX_SIGNATURE, &KEY),
            Err(Error::Padding)
        );
    }

    #[test]
    fn trailing_bytes_after_digest_are_a_padding_error() {
        assert_eq!(
            verify_signature(&firmware(), &TRAILING_BYTE_SIGNATURE, &KEY),
            Err(Error::Padding)
        );
    }

    #[test]
    fn wrong_length_signature_is_rejected_before_arithmetic() {
        assert_eq!(
            verify_signature(&firmware(), &FIRMWARE_SIGNATURE[..255], &KEY),
            Err(Error::InvalidInput)
        );
        let mut long = [0u8; 257];
        long[1..].copy_from_slice(&FIRMWARE_SIGNATURE);
        assert_eq!(verify_signature(&firmware(), &long, &KEY), Err(Error::InvalidInput));
    }

    #[test]
    fn empty_message_is_rejected() {
        assert_eq!(verify_signature(&[], &FIRMWARE_SIGNATURE, &KEY), Err(Error::InvalidInput));
    }

    #[test]
    fn signature_equal_to_modulus_decrypts_to_nothing() {
        assert_eq!(verify_signature(&firmware(), &MODULUS, &KEY), Err(Error::Padding));
    }

    #[test]
    fn encoded_block_structure_checks() {
        // Given
        let mut encoded = [0xFFu8; MODULUS_SIZE];
        encoded[0] = 0x00;
        encoded[1] = 0x01;
        let separator = MODULUS_SIZE - DIGEST_SIZE - SHA256_DIGEST_INFO.len() - 1;
        encoded[separator] = 0x00;
        encoded[separator + 1..separator + 20].copy_from_slice(&SHA256_DIGEST_INFO);
        encoded[separator + 20..].copy_from_slice(&FIRMWARE_DIGEST);

        // Then
        assert_eq!(embedded_digest(&encoded), Ok(&FIRMWARE_DIGEST[..]));

        let mut wrong_block_type = encoded;
        wrong_block_type[1] = 0x02;
        assert_eq!(embedded_digest(&wrong_block_type), Err(Error::Padding));

        let mut no_separator = encoded;
        no_separator[separator] = 0xFF;
        assert_eq!(embedded_digest(&no_separator), Err(Error::Padding));

        let mut broken_padding = encoded;
        broken_padding[5] = 0x00;
        assert_eq!(embedded_digest(&broken_padding), Err(Error::Padding));
    }

    #[test]
    fn digest_comparison() {
        assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
        assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
        assert!(!constant_time_eq(&[1, 2, 3], &[1, 2]));
    }
}
