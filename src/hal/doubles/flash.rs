use crate::{
    hal::flash::{Address, Flash, Sector},
    utilities::bitwise::SliceBitSubset,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FakeFlashError {
    OutOfBounds,
    Misaligned,
    /// Attempted to program bits that were not erased.
    NotErased,
    NoSuchSector,
    Injected,
}

/// Sector layout of the first half of an STM32F4 main flash block.
pub const STM32F4_SECTORS: [(u32, usize); 8] = [
    (0x0800_0000, 0x4000),
    (0x0800_4000, 0x4000),
    (0x0800_8000, 0x4000),
    (0x0800_C000, 0x4000),
    (0x0801_0000, 0x1_0000),
    (0x0802_0000, 0x2_0000),
    (0x0804_0000, 0x2_0000),
    (0x0806_0000, 0x2_0000),
];

/// In-memory NOR flash: erasing sets whole sectors to `0xFF`, and
/// programming can only clear bits.
pub struct FakeFlash {
    base: Address,
    data: Vec<u8>,
    sectors: Vec<Sector>,
    erase_log: Vec<u8>,
    pub fail_erase: bool,
    /// Writes touching this address fail.
    pub fail_write_at: Option<Address>,
}

impl FakeFlash {
    /// Builds a fully erased flash out of consecutive `(start, size)` sectors.
    pub fn new(layout: &[(u32, usize)]) -> Self {
        let sectors: Vec<Sector> = layout
            .iter()
            .enumerate()
            .map(|(id, &(start, size))| Sector { id: id as u8, start: Address(start), size })
            .collect();
        let base = sectors.first().map(|s| s.start).unwrap_or_default();
        let length = sectors.last().map(|s| s.end() - base).unwrap_or(0);
        Self {
            base,
            data: vec![0xFF; length],
            sectors,
            erase_log: Vec::new(),
            fail_erase: false,
            fail_write_at: None,
        }
    }

    pub fn stm32f4() -> Self { Self::new(&STM32F4_SECTORS) }

    /// Direct view of memory, bypassing the driver interface.
    pub fn contents(&self, address: Address, length: usize) -> &[u8] {
        let offset = address - self.base;
        &self.data[offset..offset + length]
    }

    /// Places bytes without any NOR semantics, to set up a scenario.
    pub fn preload(&mut self, address: Address, bytes: &[u8]) {
        let offset = address - self.base;
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    /// Ids of the sectors erased so far, in order.
    pub fn erased_sectors(&self) -> &[u8] { &self.erase_log }

    fn range(&self, address: Address, length: usize) -> Result<core::ops::Range<usize>, FakeFlashError> {
        if address < self.base || (address - self.base) + length > self.data.len() {
            return Err(FakeFlashError::OutOfBounds);
        }
        let offset = address - self.base;
        Ok(offset..offset + length)
    }
}

impl Flash for FakeFlash {
    type Error = FakeFlashError;

    fn erase_sector(&mut self, id: u8) -> nb::Result<(), Self::Error> {
        if self.fail_erase {
            return Err(nb::Error::Other(FakeFlashError::Injected));
        }
        let sector = *self.sectors.get(id as usize).ok_or(nb::Error::Other(FakeFlashError::NoSuchSector))?;
        let range = self.range(sector.start, sector.size)?;
        self.data[range].iter_mut().for_each(|b| *b = 0xFF);
        self.erase_log.push(id);
        Ok(())
    }

    fn write_block(&mut self, address: Address, bytes: &[u8]) -> nb::Result<(), Self::Error> {
        if !address.is_aligned() {
            return Err(nb::Error::Other(FakeFlashError::Misaligned));
        }
        let padded_length = (bytes.len() + 3) & !3;
        let range = self.range(address, padded_length)?;
        if let Some(failure) = self.fail_write_at {
            if failure >= address && failure < address + padded_length {
                return Err(nb::Error::Other(FakeFlashError::Injected));
            }
        }
        let mut padded = bytes.to_vec();
        padded.resize(padded_length, 0xFF);
        if !padded.as_slice().is_subset_of(&self.data[range.clone()]) {
            return Err(nb::Error::Other(FakeFlashError::NotErased));
        }
        self.data[range].copy_from_slice(&padded);
        Ok(())
    }

    fn read(&mut self, address: Address, bytes: &mut [u8]) -> nb::Result<(), Self::Error> {
        let range = self.range(address, bytes.len())?;
        bytes.copy_from_slice(&self.data[range]);
        Ok(())
    }

    fn sector_of(&self, address: Address) -> Option<Sector> {
        self.sectors.iter().find(|s| s.contains(address)).copied()
    }
}
