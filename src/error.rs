//! Citadel Error types and methods

use crate::{
    crypto::{bigint, rsa},
    hal::comm::Transport,
    uprintln,
};

/// Top level error type for the bootloader. Unlike the specific
/// module errors, this error carries enough context to be reported
/// verbatim over the transport.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Error caused by a low level peripheral driver
    DriverError(&'static str),
    /// Error caused by a faulty configuration
    ConfigurationError(&'static str),
    /// The transport failed to move bytes
    CommunicationFailure(&'static str),
    /// Nothing arrived within the allotted time
    Timeout,
    /// An unexpected command byte arrived
    InvalidCommand(u8),
    FlashEraseFailed,
    FlashWriteFailed,
    FlashCopyFailed,
    ImageTooBig,
    NoValidImage,
    SignatureInvalid,
    PaddingInvalid,
    InvalidInput,
    Arithmetic(bigint::Error),
    UnsupportedInterface,
}

/// Conversion into the top level error, implemented by every driver and
/// transport error so that `?` works across layers.
pub trait Convertible {
    fn into(self) -> Error;
}

impl<T: Convertible> From<T> for Error {
    fn from(t: T) -> Self { Convertible::into(t) }
}

impl Convertible for rsa::Error {
    fn into(self) -> Error {
        match self {
            rsa::Error::InvalidSignature => Error::SignatureInvalid,
            rsa::Error::Padding => Error::PaddingInvalid,
            rsa::Error::InvalidInput => Error::InvalidInput,
            rsa::Error::Arithmetic(error) => Error::Arithmetic(error),
        }
    }
}

impl Convertible for bigint::Error {
    fn into(self) -> Error { Error::Arithmetic(self) }
}

impl Error {
    /// Reports the error over the transport as a single human readable
    /// line. Transport failures while reporting are ignored, as there is
    /// nowhere left to report them.
    pub fn report<T: Transport>(&self, mut transport: &mut T) {
        let _ = match self {
            Error::DriverError(text) => uprintln!(transport, "[Driver Error] -> {}", text),
            Error::ConfigurationError(text) => {
                uprintln!(transport, "[Configuration Error] -> {}", text)
            }
            Error::CommunicationFailure(text) => {
                uprintln!(transport, "[Communication Error] -> {}", text)
            }
            Error::Timeout => uprintln!(transport, "[Communication Error] -> Timed out waiting for host"),
            Error::InvalidCommand(byte) => {
                uprintln!(transport, "[Protocol Error] -> Unexpected command byte {:#04x}", byte)
            }
            Error::FlashEraseFailed => uprintln!(transport, "[Flash Error] -> Sector erase failed"),
            Error::FlashWriteFailed => uprintln!(transport, "[Flash Error] -> Block write failed"),
            Error::FlashCopyFailed => {
                uprintln!(transport, "[Flash Error] -> Copy to active bank failed")
            }
            Error::ImageTooBig => uprintln!(transport, "[Logic Error] -> Firmware image too big"),
            Error::NoValidImage => {
                uprintln!(transport, "[Logic Error] -> No valid firmware image to boot")
            }
            Error::SignatureInvalid => {
                uprintln!(transport, "[Security Error] -> Image signature is invalid")
            }
            Error::PaddingInvalid => {
                uprintln!(transport, "[Security Error] -> Signature padding is malformed")
            }
            Error::InvalidInput => {
                uprintln!(transport, "[Logic Error] -> Image or signature has an invalid size")
            }
            Error::Arithmetic(error) => {
                uprintln!(transport, "[Security Error] -> Arithmetic failure ({:?})", error)
            }
            Error::UnsupportedInterface => {
                uprintln!(transport, "[Configuration Error] -> Communication interface not supported")
            }
        };
    }
}
