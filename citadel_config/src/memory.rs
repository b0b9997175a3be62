use serde::{Deserialize, Serialize};

#[macro_export(local_inner_macros)]
macro_rules! KB {
    ($val:expr) => {
        $val * 1024
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub start_address: u32,
    pub size_kb: u32,
}

impl Bank {
    pub fn end_address(&self) -> u32 { self.start_address + KB!(self.size_kb) }
    pub fn contains(&self, address: u32) -> bool {
        (self.start_address..self.end_address()).contains(&address)
    }
    pub fn overlaps(&self, other: &Bank) -> bool {
        self.start_address < other.end_address() && other.start_address < self.end_address()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfiguration {
    /// Region the bootloader itself is linked into.
    pub bootloader: Bank,
    /// Location of the firmware metadata record. It owns its whole sector.
    pub metadata_address: u32,
    /// Bank receiving images that must be verified before they are promoted.
    pub staging: Bank,
    /// Bank the application is booted from.
    pub active: Bank,
    pub ram: Bank,
}

impl Default for MemoryConfiguration {
    fn default() -> Self {
        Self {
            bootloader: Bank { start_address: 0x0800_0000, size_kb: 16 },
            metadata_address: 0x0800_4000,
            staging: Bank { start_address: 0x0801_0000, size_kb: 64 },
            active: Bank { start_address: 0x0802_0000, size_kb: 128 },
            ram: Bank { start_address: 0x2000_0000, size_kb: 128 },
        }
    }
}
