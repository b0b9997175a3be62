//! Full project ports for specific targets. They construct a generic
//! bootloader from concrete drivers and carry out the jump.

pub mod stm32f4;
