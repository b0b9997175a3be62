//! Modules with business logic related to the problem domain, layered
//! on top of the abstract `hal` traits. Devices are generic; board
//! specifics are handled in the `ports` module.

pub mod bootloader;
pub mod comm;
pub mod image;
pub mod metadata;
pub mod protocol;
