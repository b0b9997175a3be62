//! # Citadel Bootloader Library
//!
//! All functionality of the citadel secure bootloader in library form.
//! The binary in `main.rs` only wires a port together and runs it; the
//! boot logic, cryptography and protocol live here so they can be tested
//! on the host against the doubles in `hal::doubles`.
#![cfg_attr(test, allow(unused_imports))]
#![cfg_attr(target_arch = "arm", no_std)]

extern crate static_assertions;

#[cfg(feature = "defmt")]
pub(crate) use defmt as log;

/// Logging sink when no `defmt` transport is compiled in.
#[cfg(not(feature = "defmt"))]
pub(crate) mod log {
    macro_rules! info {
        ( $( $x:expr ),* ) => {{ $( let _ = &$x; )* }};
    }
    pub(crate) use info;
    macro_rules! trace {
        ( $( $x:expr ),* ) => {{ $( let _ = &$x; )* }};
    }
    pub(crate) use trace;
    macro_rules! error {
        ( $( $x:expr ),* ) => {{ $( let _ = &$x; )* }};
    }
    pub(crate) use error;
    macro_rules! warning {
        ( $( $x:expr ),* ) => {{ $( let _ = &$x; )* }};
    }
    pub(crate) use warning as warn;
}

#[macro_use]
pub mod utilities {
    pub mod bitwise;
    pub mod guard;
}

pub mod config;
pub mod crypto;
pub mod devices;
pub mod drivers;
pub mod error;
pub mod hal;

#[cfg(target_arch = "arm")]
pub mod ports;
