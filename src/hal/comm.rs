//! Communication capabilities.
//!
//! A `Transport` is the capability set the boot protocol talks through:
//! bring-up, send, and a non-blocking receive. `SerialPort` is the lower
//! level byte pipe a USART driver exposes, which transports wrap.
use crate::error::Convertible;
use core::fmt;

pub trait Transport {
    type Error: Convertible + Copy + Clone + fmt::Debug;

    /// Prepares the link. Discards anything received beforehand.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Sends all of `bytes`, blocking until the peripheral accepted them.
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Moves whatever is available into `buffer` without waiting, and
    /// returns how many bytes were moved. Zero means nothing was pending.
    fn recv(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;
    fn init(&mut self) -> Result<(), Self::Error> { (**self).init() }
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> { (**self).send(bytes) }
    fn recv(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error> { (**self).recv(buffer) }
}

/// Raw byte pipe of a serial peripheral.
pub trait SerialPort {
    type Error: Copy + Clone + fmt::Debug;

    fn read_byte(&mut self) -> nb::Result<u8, Self::Error>;
    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error>;
}

/// `core::fmt` adapter over a transport, so diagnostics can be formatted
/// straight onto the link without an intermediate buffer.
pub struct Printer<'a, T: Transport>(pub &'a mut T);

impl<'a, T: Transport> fmt::Write for Printer<'a, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result { self.0.send(s.as_bytes()).map_err(|_| fmt::Error) }
}

/// Prints formatted text to a transport.
#[macro_export]
macro_rules! uprint {
    ($transport:expr, $($arg:tt)*) => {
        core::fmt::Write::write_fmt(
            &mut $crate::hal::comm::Printer(&mut $transport),
            format_args!($($arg)*),
        )
    };
}

/// Prints formatted text to a transport, terminated by `\r\n`.
#[macro_export]
macro_rules! uprintln {
    ($transport:expr, $($arg:tt)*) => {
        $crate::uprint!($transport, "{}\r\n", format_args!($($arg)*))
    };
}
