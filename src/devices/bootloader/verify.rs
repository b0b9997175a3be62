//! Signature verification of images in flash.
use super::*;
use crate::crypto::{rsa, sha256::Sha256};
use core::cmp::min;

/// Bytes hashed per flash read.
const READ_BUFFER_SIZE: usize = 256;

impl<F: Flash, T: Transport, C: Now> Bootloader<F, T, C> {
    /// Checks the signature stored after `image` against the configured key,
    /// hashing the firmware straight out of flash.
    pub(super) fn verify(&mut self, image: &Image) -> Result<(), Error> {
        if image.size == 0 || image.signature_length > protocol::MAX_SIGNATURE_SIZE {
            return Err(Error::InvalidInput);
        }
        info!("Verifying image at {:?}", image.location);

        let digest = digest_of(&mut self.flash, image.location, image.size)?;

        let mut signature = [0u8; protocol::MAX_SIGNATURE_SIZE];
        let signature = &mut signature[..image.signature_length];
        block!(self.flash.read(image.signature_location, signature))
            .map_err(|_| Error::DriverError("Flash read failed"))?;

        rsa::verify_digest(&digest, signature, &self.settings.key)?;
        info!("Signature valid");
        Ok(())
    }
}

/// SHA-256 of `length` bytes of flash starting at `start`.
pub(crate) fn digest_of<F: Flash>(flash: &mut F, start: Address, length: usize) -> Result<[u8; 32], Error> {
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; READ_BUFFER_SIZE];
    let mut offset = 0;
    while offset < length {
        let chunk = &mut buffer[..min(READ_BUFFER_SIZE, length - offset)];
        block!(flash.read(start + offset, chunk)).map_err(|_| Error::DriverError("Flash read failed"))?;
        hasher.update(chunk);
        offset += chunk.len();
    }
    Ok(hasher.finalize())
}
