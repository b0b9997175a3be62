//! Update wire protocol.
//!
//! Shared between the device and the host uploader so that both ends agree
//! on every command and acknowledgement byte.
//!
//! ```text
//! device                          host
//!   BOOT_FINISHED  ------------->
//!   "Waiting for ..." banner --->
//!                  <-------------   'y' | 'f' | 's'
//!   UPDATE_ACK ----------------->
//!                  <-------------   START
//!   START_ACK  ----------------->
//!                  <-------------   firmware size (u32 LE)
//!   SIZE_ACK   ----------------->
//!                  <-------------   ERASE
//!   ERASE_ACK  ----------------->
//!                  <-------------   chunk (<= CHUNK_SIZE)   } repeated
//!   CHUNK_ACK  ----------------->                          }
//!                  <-------------   SIGNATURE
//!   SIGNATURE_ACK -------------->
//!                  <-------------   signature size (u32 LE)
//!   SIGNATURE_ACK -------------->
//!                  <-------------   signature chunk          } repeated
//!   SIGNATURE_ACK -------------->                          }
//! ```

/// Sent once the transport is up.
pub const BOOT_FINISHED: u8 = 0x88;
/// Acknowledges any recognized decision byte.
pub const UPDATE_ACK: u8 = 0x8F;
pub const START: u8 = 0x55;
pub const START_ACK: u8 = 0xAA;
pub const SIZE_ACK: u8 = 0xAA;
pub const ERASE: u8 = 0xEC;
pub const ERASE_ACK: u8 = 0xAB;
pub const CHUNK_ACK: u8 = 0xCC;
pub const SIGNATURE: u8 = 0x53;
/// Acknowledges the signature command, its size and each of its chunks.
pub const SIGNATURE_ACK: u8 = 0xAC;

/// Largest block of firmware or signature sent between acknowledgements.
pub const CHUNK_SIZE: usize = 256;
/// Largest signature the device accepts.
pub const MAX_SIGNATURE_SIZE: usize = 512;

pub const BANNER: &str = "Waiting for firmware update command...";
pub const RECEIVED_MESSAGE: &str = "OK: firmware received";
pub const FAILED_MESSAGE: &str = "ERR: firmware update failed";
pub const JUMP_MESSAGE: &str = "Jumping to application";

/// Host's answer to the update prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decision {
    /// Receive into the staging bank, verify, then swap.
    Update,
    /// Receive straight into the active bank. Skips verification.
    ForceUpdate,
    /// Boot whatever is currently installed.
    Skip,
}

impl Decision {
    pub const UPDATE: u8 = b'y';
    pub const FORCE_UPDATE: u8 = b'f';
    pub const SKIP: u8 = b's';

    /// Case insensitive decoding of a command byte.
    pub fn parse(byte: u8) -> Option<Self> {
        match byte.to_ascii_lowercase() {
            Self::UPDATE => Some(Decision::Update),
            Self::FORCE_UPDATE => Some(Decision::ForceUpdate),
            Self::SKIP => Some(Decision::Skip),
            _ => None,
        }
    }
}
