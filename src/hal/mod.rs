//! Hardware abstraction layer.
//!
//! Traits the bootloader logic is written against. Concrete drivers live
//! in `drivers`, and host-side stand-ins in `doubles`.
pub mod comm;
pub mod flash;
pub mod time;

#[cfg(not(target_arch = "arm"))]
#[doc(hidden)]
pub mod doubles;
