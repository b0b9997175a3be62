//! Flash capability consumed by the bootloader core.
//!
//! Operations are non-blocking in the `nb` sense: a driver that is still
//! busy with a previous erase or program may yield `WouldBlock`, and the
//! caller decides whether to spin on it.
use core::{
    cmp::min,
    fmt,
    ops::{Add, Sub},
};
use nb::block;

/// Absolute address in the MCU's memory map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address(pub u32);

impl Address {
    /// Rounds up to the next word boundary.
    pub const fn align_up(self) -> Self { Address((self.0 + 3) & !3) }
    pub const fn is_aligned(self) -> bool { self.0 % 4 == 0 }
}

impl Add<usize> for Address {
    type Output = Address;
    fn add(self, rhs: usize) -> Address { Address(self.0 + rhs as u32) }
}

impl Sub<Address> for Address {
    type Output = usize;
    fn sub(self, rhs: Address) -> usize { self.0.saturating_sub(rhs.0) as usize }
}

impl From<Address> for usize {
    fn from(address: Address) -> Self { address.0 as usize }
}

/// Smallest erasable unit of a flash chip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sector {
    pub id: u8,
    pub start: Address,
    pub size: usize,
}

impl Sector {
    pub fn end(&self) -> Address { self.start + self.size }
    pub fn contains(&self, address: Address) -> bool { address >= self.start && address < self.end() }
}

/// Size of the intermediate buffer used by `copy_region`.
pub const COPY_BUFFER_SIZE: usize = 256;

pub trait Flash {
    type Error: Copy + Clone + fmt::Debug;

    /// Sets every byte of a sector to `0xFF`.
    fn erase_sector(&mut self, id: u8) -> nb::Result<(), Self::Error>;

    /// Programs `bytes` starting at a word aligned `address`. A trailing
    /// partial word is padded with `0xFF`. The target range must have been
    /// erased beforehand.
    fn write_block(&mut self, address: Address, bytes: &[u8]) -> nb::Result<(), Self::Error>;

    fn read(&mut self, address: Address, bytes: &mut [u8]) -> nb::Result<(), Self::Error>;

    /// Sector containing `address`, if any.
    fn sector_of(&self, address: Address) -> Option<Sector>;

    /// Little endian word at a word aligned address.
    fn read_word(&mut self, address: Address) -> nb::Result<u32, Self::Error> {
        let mut bytes = [0u8; 4];
        self.read(address, &mut bytes)?;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Copies `length` bytes from `source` into the already erased range
    /// starting at `destination`.
    fn copy_region(
        &mut self,
        source: Address,
        destination: Address,
        length: usize,
    ) -> nb::Result<(), Self::Error> {
        let mut buffer = [0u8; COPY_BUFFER_SIZE];
        let mut offset = 0usize;
        while offset < length {
            let chunk = min(COPY_BUFFER_SIZE, length - offset);
            block!(self.read(source + offset, &mut buffer[..chunk]))?;
            block!(self.write_block(destination + offset, &buffer[..chunk]))?;
            offset += chunk;
        }
        Ok(())
    }
}
