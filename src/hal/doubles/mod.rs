//! Host-side stand-ins for hardware, used by unit tests.
pub mod comm;
pub mod error;
pub mod flash;
pub mod time;
