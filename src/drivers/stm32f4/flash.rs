//! Internal Flash controller for the STM32F4 family

use crate::{
    drivers::Register,
    error::{Convertible, Error as CitadelError},
    hal::flash::{self, Address, Flash},
    utilities::{bitwise::BitFlags, guard::Guard},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    MemoryNotReachable,
    MisalignedAccess,
    /// The controller flagged a programming sequence, alignment or
    /// protection fault.
    ProgrammingFault,
    /// A programmed word did not read back as written.
    VerifyFailed,
}

impl Convertible for Error {
    fn into(self) -> CitadelError {
        CitadelError::DriverError(match self {
            Error::MemoryNotReachable => "MCU flash memory not reachable",
            Error::MisalignedAccess => "MCU flash memory access misaligned",
            Error::ProgrammingFault => "MCU flash controller reported a fault",
            Error::VerifyFailed => "MCU flash readback mismatch",
        })
    }
}

/// Different address blocks of the main memory area
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Holds the bootloader itself. Never erased or programmed.
    Boot,
    /// Metadata and image banks.
    Main,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sector {
    pub block: Block,
    pub start: Address,
    pub size: usize,
}

impl Sector {
    const fn new(block: Block, start: u32, size: usize) -> Self {
        Sector { block, start: Address(start), size }
    }
    fn end(&self) -> Address { self.start + self.size }
}

pub const SECTOR_NUMBER: usize = 12;

/// Main memory sectors of a 1 MiB STM32F412.
pub const MEMORY_MAP: [Sector; SECTOR_NUMBER] = [
    Sector::new(Block::Boot, 0x0800_0000, 0x4000),
    Sector::new(Block::Main, 0x0800_4000, 0x4000),
    Sector::new(Block::Main, 0x0800_8000, 0x4000),
    Sector::new(Block::Main, 0x0800_C000, 0x4000),
    Sector::new(Block::Main, 0x0801_0000, 0x1_0000),
    Sector::new(Block::Main, 0x0802_0000, 0x2_0000),
    Sector::new(Block::Main, 0x0804_0000, 0x2_0000),
    Sector::new(Block::Main, 0x0806_0000, 0x2_0000),
    Sector::new(Block::Main, 0x0808_0000, 0x2_0000),
    Sector::new(Block::Main, 0x080A_0000, 0x2_0000),
    Sector::new(Block::Main, 0x080C_0000, 0x2_0000),
    Sector::new(Block::Main, 0x080E_0000, 0x2_0000),
];

const FLASH_BASE: u32 = 0x4002_3C00;
const KEYR: u32 = 0x04;
const SR: u32 = 0x0C;
const CR: u32 = 0x10;

const UNLOCK_KEYS: [u32; 2] = [0x4567_0123, 0xCDEF_89AB];

const SR_BSY: u8 = 16;
/// PGSERR, PGPERR, PGAERR, WRPERR and OPERR.
const SR_ERROR_MASK: u32 = 0b1111_0010;
const CR_PG: u32 = 1 << 0;
const CR_SER: u32 = 1 << 1;
const CR_SNB_SHIFT: u32 = 3;
const CR_SNB_MASK: u32 = 0b1111 << CR_SNB_SHIFT;
/// 32-bit parallelism, valid from 2.7V to 3.6V.
const CR_PSIZE_X32: u32 = 0b10 << 8;
const CR_STRT: u32 = 1 << 16;
const CR_LOCK: u32 = 1 << 31;

fn sector_index(address: Address) -> Option<usize> {
    MEMORY_MAP.iter().position(|s| address >= s.start && address < s.end())
}

/// Whether `[address, address + length)` lies entirely in sectors of `block`
/// (or anywhere in main memory, when reading).
fn range_in(address: Address, length: usize, writable: bool) -> bool {
    let last = address + length.saturating_sub(1);
    match (sector_index(address), sector_index(last)) {
        (Some(first), Some(last)) => {
            !writable || MEMORY_MAP[first..=last].iter().all(|s| s.block == Block::Main)
        }
        _ => false,
    }
}

struct Registers {
    keyr: Register,
    sr: Register,
    cr: Register,
}

impl Registers {
    fn unlock(&mut self) {
        if self.cr.read().is_set(31) {
            self.keyr.write(UNLOCK_KEYS[0]);
            self.keyr.write(UNLOCK_KEYS[1]);
        }
    }

    fn lock(&mut self) {
        self.cr.clear_bits(CR_PG | CR_SER | CR_SNB_MASK);
        self.cr.set_bits(CR_LOCK);
    }

    fn is_busy(&self) -> bool { self.sr.read().is_set(SR_BSY) }

    fn wait_until_idle(&self) {
        while self.is_busy() {}
    }

    /// Reads and clears the sticky error flags.
    fn take_errors(&mut self) -> Result<(), Error> {
        let errors = self.sr.read() & SR_ERROR_MASK;
        if errors == 0 {
            Ok(())
        } else {
            self.sr.write(errors);
            Err(Error::ProgrammingFault)
        }
    }
}

pub struct McuFlash {
    registers: Registers,
}

impl McuFlash {
    /// # Safety
    ///
    /// Only one instance may exist, as it drives the flash controller.
    pub unsafe fn new() -> Self {
        let base = Register::at(FLASH_BASE);
        Self { registers: Registers { keyr: base.offset(KEYR), sr: base.offset(SR), cr: base.offset(CR) } }
    }
}

impl Flash for McuFlash {
    type Error = Error;

    fn erase_sector(&mut self, id: u8) -> nb::Result<(), Error> {
        let sector = MEMORY_MAP.get(id as usize).ok_or(nb::Error::Other(Error::MemoryNotReachable))?;
        if sector.block != Block::Main {
            return Err(nb::Error::Other(Error::MemoryNotReachable));
        }
        if self.registers.is_busy() {
            return Err(nb::Error::WouldBlock);
        }

        let mut unlocked = Guard::new(&mut self.registers, Registers::unlock, Registers::lock);
        let registers = unlocked.item_mut();
        registers.cr.modify(|cr| {
            (cr & !CR_SNB_MASK) | CR_SER | ((id as u32) << CR_SNB_SHIFT) | CR_PSIZE_X32
        });
        registers.cr.set_bits(CR_STRT);
        registers.wait_until_idle();
        registers.take_errors()?;
        Ok(())
    }

    fn write_block(&mut self, address: Address, bytes: &[u8]) -> nb::Result<(), Error> {
        if !address.is_aligned() {
            return Err(nb::Error::Other(Error::MisalignedAccess));
        }
        if !range_in(address, bytes.len(), true) {
            return Err(nb::Error::Other(Error::MemoryNotReachable));
        }
        if self.registers.is_busy() {
            return Err(nb::Error::WouldBlock);
        }

        let mut unlocked = Guard::new(&mut self.registers, Registers::unlock, Registers::lock);
        let registers = unlocked.item_mut();
        registers.cr.modify(|cr| (cr & !CR_SER) | CR_PG | CR_PSIZE_X32);

        let base = address.0 as *mut u32;
        for (index, chunk) in bytes.chunks(4).enumerate() {
            let mut word = [0xFFu8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            let word = u32::from_le_bytes(word);
            // NOTE(Safety): Writing to memory-mapped flash is inherently unsafe. The
            // range was checked against the memory map above, which excludes the
            // sectors holding this bootloader.
            let readback = unsafe {
                core::ptr::write_volatile(base.add(index), word);
                registers.wait_until_idle();
                core::ptr::read_volatile(base.add(index))
            };
            registers.take_errors()?;
            if readback != word {
                return Err(nb::Error::Other(Error::VerifyFailed));
            }
        }
        Ok(())
    }

    fn read(&mut self, address: Address, bytes: &mut [u8]) -> nb::Result<(), Error> {
        if !range_in(address, bytes.len(), false) {
            return Err(nb::Error::Other(Error::MemoryNotReachable));
        }
        let base = address.0 as *const u8;
        for (index, byte) in bytes.iter_mut().enumerate() {
            // NOTE(Safety): The range lies within main memory, and any write to it
            // goes through a mutable reference to this same driver.
            *byte = unsafe { core::ptr::read_volatile(base.add(index)) };
        }
        Ok(())
    }

    fn sector_of(&self, address: Address) -> Option<flash::Sector> {
        sector_index(address).map(|index| flash::Sector {
            id: index as u8,
            start: MEMORY_MAP[index].start,
            size: MEMORY_MAP[index].size,
        })
    }
}
