//! Build time configuration.
//!
//! The constants below are generated by `build.rs` from the RON file named
//! by the `CITADEL_CONFIG` environment variable (or from the defaults when
//! it is unset), so every port is compiled against the same memory map the
//! linker script describes.
use crate::{
    crypto::rsa::PublicKey,
    devices::{
        bootloader::{MemoryMap, SecurityMode, Settings},
        comm::{Framing, Interface},
        image::Bank,
    },
    hal::{flash::Address, time::Milliseconds},
};

include!(concat!(env!("OUT_DIR"), "/config.rs"));

/// Key every image is checked against.
pub const PUBLIC_KEY: PublicKey<'static> =
    PublicKey { modulus: &PUBLIC_MODULUS, exponent: PUBLIC_EXPONENT };

/// Bootloader settings as configured for this build.
pub fn settings() -> Settings {
    Settings {
        memory: MemoryMap {
            metadata: Address(METADATA_ADDRESS),
            staging: Bank {
                location: Address(STAGING_BANK_ADDRESS),
                size: STAGING_BANK_SIZE,
                max_image_size: STAGING_MAX_IMAGE_SIZE,
            },
            active: Bank {
                location: Address(ACTIVE_BANK_ADDRESS),
                size: ACTIVE_BANK_SIZE,
                max_image_size: ACTIVE_MAX_IMAGE_SIZE,
            },
        },
        security: SECURITY_MODE,
        key: PUBLIC_KEY,
        decision_timeout: Milliseconds(DECISION_TIMEOUT_MS),
        receive_timeout: Milliseconds(RECEIVE_TIMEOUT_MS),
    }
}
