//! Installing a verified staged image into the active bank.
use super::*;
use crate::hal::flash::COPY_BUFFER_SIZE;
use core::cmp::min;

impl<F: Flash, T: Transport, C: Now> Bootloader<F, T, C> {
    /// Copies a verified staged image and its signature over the active
    /// bank and commits metadata describing the copy. The metadata is
    /// invalidated first, so an interrupted swap leaves nothing bootable
    /// rather than a half written image marked as valid.
    pub(super) fn swap(&mut self, staged: Image) -> Result<(), Error> {
        let bank = self.settings.memory.active;
        let active = staged.relocated(&bank);
        if active.end() > bank.end() {
            return Err(Error::ImageTooBig);
        }
        info!("Installing staged image into the active bank");

        self.invalidate_metadata()?;
        erase_range(&mut self.flash, active.location, active.footprint())?;

        for (source, destination, length) in [
            (staged.location, active.location, staged.size),
            (staged.signature_location, active.signature_location, staged.signature_length),
        ] {
            block!(self.flash.copy_region(source, destination, length))
                .map_err(|_| Error::FlashCopyFailed)?;
            self.compare_regions(source, destination, length)?;
        }

        let flags = match self.settings.security {
            SecurityMode::Rsa2048 => Flags::VALID | Flags::SECURE_BOOT,
            SecurityMode::None => Flags::VALID,
        };
        self.commit(&active, flags)
    }

    fn compare_regions(&mut self, left: Address, right: Address, length: usize) -> Result<(), Error> {
        let mut left_buffer = [0u8; COPY_BUFFER_SIZE];
        let mut right_buffer = [0u8; COPY_BUFFER_SIZE];
        let mut offset = 0;
        while offset < length {
            let chunk = min(COPY_BUFFER_SIZE, length - offset);
            block!(self.flash.read(left + offset, &mut left_buffer[..chunk]))
                .map_err(|_| Error::FlashCopyFailed)?;
            block!(self.flash.read(right + offset, &mut right_buffer[..chunk]))
                .map_err(|_| Error::FlashCopyFailed)?;
            if left_buffer[..chunk] != right_buffer[..chunk] {
                return Err(Error::FlashCopyFailed);
            }
            offset += chunk;
        }
        Ok(())
    }
}
