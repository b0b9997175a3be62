//! Driver implementations for the supported STM32F4 parts and the
//! Cortex-M core. Register blocks are accessed directly through their
//! memory mapped addresses from the reference manual.

pub mod stm32f4 {
    pub mod flash;
    pub mod rcc;
    pub mod usart;
}

pub mod systick;

#[cfg(target_arch = "arm")]
pub mod jump;

use core::ptr::{read_volatile, write_volatile};

/// A 32-bit memory mapped peripheral register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Register(u32);

impl Register {
    /// # Safety
    ///
    /// `address` must be a valid, word aligned peripheral register on the
    /// running part, and the caller must be the only one driving it.
    pub const unsafe fn at(address: u32) -> Self { Register(address) }

    /// Register `offset` bytes into the same block.
    pub const fn offset(self, offset: u32) -> Self { Register(self.0 + offset) }

    pub fn read(self) -> u32 {
        // NOTE(Safety): Validity of the address was promised on construction.
        unsafe { read_volatile(self.0 as *const u32) }
    }

    pub fn write(self, value: u32) {
        // NOTE(Safety): Validity of the address was promised on construction.
        unsafe { write_volatile(self.0 as *mut u32, value) }
    }

    pub fn modify<F: FnOnce(u32) -> u32>(self, f: F) { self.write(f(self.read())) }
    pub fn set_bits(self, mask: u32) { self.modify(|v| v | mask) }
    pub fn clear_bits(self, mask: u32) { self.modify(|v| v & !mask) }
}
