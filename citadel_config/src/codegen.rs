//! Generation of the Rust constants and linker script a bootloader
//! build is compiled against.
use std::{fs::OpenOptions, io::Write, path::Path};

use anyhow::Result;

use crate::{
    security::{SecurityMode, RSA_2048_MODULUS_BYTES},
    serial::{Framing, Interface},
    Configuration, KB,
};

/// Writes `config.rs` into `out_dir`. The bootloader `include!`s it.
pub fn generate_config_module<P: AsRef<Path>>(out_dir: P, configuration: &Configuration) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(out_dir.as_ref().join("config.rs"))?;

    let memory = &configuration.memory;
    writeln!(file, "// Generated by citadel_config. Do not edit.")?;
    writeln!(file, "pub const METADATA_ADDRESS: u32 = 0x{:08X};", memory.metadata_address)?;
    writeln!(file, "pub const STAGING_BANK_ADDRESS: u32 = 0x{:08X};", memory.staging.start_address)?;
    writeln!(file, "pub const STAGING_BANK_SIZE: usize = {};", KB!(memory.staging.size_kb))?;
    writeln!(
        file,
        "pub const STAGING_MAX_IMAGE_SIZE: usize = {};",
        configuration.max_image_size(&memory.staging)
    )?;
    writeln!(file, "pub const ACTIVE_BANK_ADDRESS: u32 = 0x{:08X};", memory.active.start_address)?;
    writeln!(file, "pub const ACTIVE_BANK_SIZE: usize = {};", KB!(memory.active.size_kb))?;
    writeln!(
        file,
        "pub const ACTIVE_MAX_IMAGE_SIZE: usize = {};",
        configuration.max_image_size(&memory.active)
    )?;

    let security = &configuration.security;
    let mode = match security.security_mode {
        SecurityMode::None => "None",
        SecurityMode::Rsa2048 => "Rsa2048",
    };
    let mut modulus = [0u8; RSA_2048_MODULUS_BYTES];
    modulus.iter_mut().zip(security.modulus.iter()).for_each(|(o, i)| *o = *i);
    writeln!(file, "pub const SECURITY_MODE: SecurityMode = SecurityMode::{};", mode)?;
    writeln!(file, "pub const PUBLIC_MODULUS: [u8; {}] = {:?};", RSA_2048_MODULUS_BYTES, modulus)?;
    writeln!(file, "pub const PUBLIC_EXPONENT: u32 = {};", security.exponent)?;

    let serial = &configuration.serial;
    let interface = match serial.interface {
        Interface::Uart => "Uart",
        Interface::Usb => "Usb",
        Interface::Spi => "Spi",
        Interface::I2c => "I2c",
    };
    let framing = match serial.framing {
        Framing::Raw => "Raw",
        Framing::LineTerminated => "LineTerminated",
    };
    writeln!(file, "pub const INTERFACE: Interface = Interface::{};", interface)?;
    writeln!(file, "pub const BAUD_RATE: u32 = {};", serial.baud_rate)?;
    writeln!(file, "pub const FRAMING: Framing = Framing::{};", framing)?;

    writeln!(file, "pub const DECISION_TIMEOUT_MS: u32 = {};", configuration.timeouts.decision_ms)?;
    writeln!(file, "pub const RECEIVE_TIMEOUT_MS: u32 = {};", configuration.timeouts.receive_ms)?;
    Ok(())
}

/// Generates the linker script `memory.x`, which describes the flash and
/// RAM regions the bootloader itself may occupy.
pub fn generate_linker_script<P: AsRef<Path>>(out_dir: P, configuration: &Configuration) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(out_dir.as_ref().join("memory.x"))?;

    let memory = &configuration.memory;
    write!(
        file,
        "MEMORY\n\
         {{\n\
             FLASH : ORIGIN = 0x{:08X}, LENGTH = {}K\n\
             RAM : ORIGIN = 0x{:08X}, LENGTH = {}K\n\
         }}\n",
        memory.bootloader.start_address,
        memory.bootloader.size_kb,
        memory.ram.start_address,
        memory.ram.size_kb,
    )?;
    Ok(())
}
