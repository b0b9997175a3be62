//! This citadel sub-crate contains the configuration model for a
//! bootloader build.
//!
//! NOTE: Nothing in the bootloader itself links against this crate.
//! It is a dependency of the **build script**, which deserializes a
//! configuration file, validates it and generates the constants and
//! linker script the bootloader is compiled with.

use anyhow::{anyhow, ensure, Result};
use serde::{Deserialize, Serialize};

pub mod codegen;
pub mod memory;
pub mod security;
pub mod serial;

use memory::MemoryConfiguration;
use security::{SecurityConfiguration, SecurityMode, RSA_2048_MODULUS_BYTES};
use serial::{Interface, SerialConfiguration, TimeoutConfiguration};

/// Largest image the wire protocol accepts, regardless of bank size.
pub const MAX_FIRMWARE_SIZE: u32 = KB!(128);

/// Space reserved after each image for its signature.
pub const SIGNATURE_AREA_SIZE: u32 = 512;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub memory: MemoryConfiguration,
    pub security: SecurityConfiguration,
    pub serial: SerialConfiguration,
    pub timeouts: TimeoutConfiguration,
}

impl Configuration {
    /// Checks the configuration for inconsistencies that would make
    /// the resulting bootloader unsafe or unusable.
    pub fn validate(&self) -> Result<()> {
        let memory = &self.memory;
        let banks = [("bootloader", memory.bootloader), ("staging", memory.staging), ("active", memory.active)];

        for (i, (name, bank)) in banks.iter().enumerate() {
            ensure!(bank.size_kb > 0, "[Memory Map] {} bank is empty", name);
            for (other_name, other) in banks.iter().skip(i + 1) {
                ensure!(
                    !bank.overlaps(other),
                    "[Memory Map] {} bank overlaps {} bank",
                    name,
                    other_name
                );
            }
            ensure!(
                !bank.contains(memory.metadata_address),
                "[Memory Map] metadata record lies inside the {} bank",
                name
            );
        }
        ensure!(memory.metadata_address % 4 == 0, "[Memory Map] metadata address is misaligned");
        ensure!(
            memory.staging.start_address % 4 == 0 && memory.active.start_address % 4 == 0,
            "[Memory Map] firmware banks must be word aligned"
        );

        if self.security.security_mode == SecurityMode::Rsa2048 {
            ensure!(
                self.security.modulus.len() == RSA_2048_MODULUS_BYTES,
                "[Security] RSA-2048 modulus must be {} bytes, found {}",
                RSA_2048_MODULUS_BYTES,
                self.security.modulus.len()
            );
            ensure!(self.security.exponent % 2 == 1, "[Security] public exponent must be odd");
        }

        if self.serial.interface != Interface::Uart {
            return Err(anyhow!("[Serial] {:?} transport is not supported", self.serial.interface));
        }
        ensure!(self.serial.baud_rate > 0, "[Serial] baud rate must be nonzero");
        ensure!(
            self.timeouts.decision_ms > 0 && self.timeouts.receive_ms > 0,
            "[Timeouts] timeouts must be nonzero"
        );
        Ok(())
    }

    /// Largest firmware image that fits the given bank alongside its signature.
    pub fn max_image_size(&self, bank: &memory::Bank) -> u32 {
        KB!(bank.size_kb).saturating_sub(SIGNATURE_AREA_SIZE).min(MAX_FIRMWARE_SIZE)
    }
}
