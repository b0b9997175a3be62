//! Firmware metadata record.
//!
//! A single packed record at a fixed flash address describes the image the
//! bootloader is allowed to boot. It is only ever replaced by erasing its
//! sector and programming a fresh record, which is the last step of any
//! update.
use crate::{
    devices::image::Image,
    error::Error,
    hal::flash::{Address, Flash},
    log::{info, warn},
};
use bitflags::bitflags;
use nb::block;
use static_assertions::const_assert_eq;

/// Layout revision understood by this bootloader.
pub const FORMAT_VERSION: u32 = 0x0001_0000;

/// `version:u32, fw_addr:u32, fw_size:u32, sig_addr:u32, sig_len:u16, flags:u32`
pub const SERIALIZED_SIZE: usize = 22;
const_assert_eq!(SERIALIZED_SIZE, 4 + 4 + 4 + 4 + 2 + 4);

bitflags! {
    pub struct Flags: u32 {
        const VALID = 0b001;
        const SECURE_BOOT = 0b010;
        const ENCRYPTED = 0b100;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub version: u32,
    pub firmware_address: Address,
    pub firmware_size: u32,
    pub signature_address: Address,
    pub signature_length: u16,
    pub flags: Flags,
}

impl Metadata {
    /// Record describing `image`, in the current format.
    pub fn describing(image: &Image, flags: Flags) -> Self {
        Self {
            version: FORMAT_VERSION,
            firmware_address: image.location,
            firmware_size: image.size as u32,
            signature_address: image.signature_location,
            signature_length: image.signature_length as u16,
            flags,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.version == FORMAT_VERSION && self.flags.contains(Flags::VALID)
    }

    pub fn image(&self) -> Image {
        Image {
            location: self.firmware_address,
            size: self.firmware_size as usize,
            signature_location: self.signature_address,
            signature_length: self.signature_length as usize,
        }
    }

    pub fn serialize(&self) -> [u8; SERIALIZED_SIZE] {
        let mut bytes = [0u8; SERIALIZED_SIZE];
        bytes[0..4].copy_from_slice(&self.version.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.firmware_address.0.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.firmware_size.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.signature_address.0.to_le_bytes());
        bytes[16..18].copy_from_slice(&self.signature_length.to_le_bytes());
        bytes[18..22].copy_from_slice(&self.flags.bits().to_le_bytes());
        bytes
    }

    /// Parses a record. Unknown flag bits are dropped.
    pub fn deserialize(bytes: &[u8; SERIALIZED_SIZE]) -> Self {
        let word = |offset: usize| {
            u32::from_le_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
        };
        Self {
            version: word(0),
            firmware_address: Address(word(4)),
            firmware_size: word(8),
            signature_address: Address(word(12)),
            signature_length: u16::from_le_bytes([bytes[16], bytes[17]]),
            flags: Flags::from_bits_truncate(word(18)),
        }
    }
}

/// Reads and replaces the record at a fixed address.
#[derive(Clone, Copy, Debug)]
pub struct MetadataStore {
    address: Address,
}

impl MetadataStore {
    pub const fn new(address: Address) -> Self { Self { address } }
    pub fn address(&self) -> Address { self.address }

    /// The stored record, if one in the current format and marked valid is
    /// present. Erased flash reads as no record.
    pub fn load<F: Flash>(&self, flash: &mut F) -> Option<Metadata> {
        let mut bytes = [0u8; SERIALIZED_SIZE];
        if block!(flash.read(self.address, &mut bytes)).is_err() {
            warn!("Metadata could not be read");
            return None;
        }
        Some(Metadata::deserialize(&bytes)).filter(Metadata::is_valid)
    }

    /// Erases the record, leaving no bootable image described.
    pub fn invalidate<F: Flash>(&self, flash: &mut F) -> Result<(), Error> {
        let sector = flash
            .sector_of(self.address)
            .ok_or(Error::ConfigurationError("Metadata address outside flash"))?;
        block!(flash.erase_sector(sector.id)).map_err(|_| Error::FlashEraseFailed)?;
        Ok(())
    }

    /// Replaces the record with `metadata`, reading it back to confirm the
    /// write landed.
    pub fn commit<F: Flash>(&self, flash: &mut F, metadata: &Metadata) -> Result<(), Error> {
        self.invalidate(flash)?;
        let bytes = metadata.serialize();
        block!(flash.write_block(self.address, &bytes)).map_err(|_| Error::FlashWriteFailed)?;

        let mut readback = [0u8; SERIALIZED_SIZE];
        block!(flash.read(self.address, &mut readback)).map_err(|_| Error::FlashWriteFailed)?;
        if readback != bytes {
            return Err(Error::FlashWriteFailed);
        }
        info!("Metadata committed");
        Ok(())
    }
}
