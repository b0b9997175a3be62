//! Cryptographic primitives backing image verification.

pub mod bigint;
pub mod rsa;
pub mod sha256;

#[cfg(test)]
pub(crate) mod test_vectors;
