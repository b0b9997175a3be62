//! Communication channel selection and timed reads.
//!
//! The boot protocol only ever sees a `Transport`. This module decides
//! which concrete transport backs it, and adds the bounded waits the
//! protocol is built from.
use crate::{
    error::Error,
    hal::{
        comm::{SerialPort, Transport},
        time::{poll_until, Milliseconds, Now},
    },
    log::info,
};

pub mod uart;
pub use uart::Uart;

/// Physical channel used to talk to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Interface {
    Uart,
    Usb,
    Spi,
    I2c,
}

/// How bytes are delimited on the channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Framing {
    /// Bytes pass through untouched.
    Raw,
    /// Sends end in `\n`, and received data is released a line at a time
    /// with the terminator removed.
    LineTerminated,
}

/// Builds the transport for `interface` over a serial peripheral. Only
/// UART is wired on the supported boards.
pub fn select<S: SerialPort>(interface: Interface, port: S, framing: Framing) -> Result<Uart<S>, Error> {
    match interface {
        Interface::Uart => {
            info!("Selected UART transport");
            Ok(Uart::new(port, framing))
        }
        Interface::Usb | Interface::Spi | Interface::I2c => Err(Error::UnsupportedInterface),
    }
}

/// Waits up to `timeout` for a single byte.
pub fn recv_byte_timeout<T: Transport, C: Now>(
    transport: &mut T,
    clock: &C,
    timeout: Milliseconds,
) -> Result<u8, Error> {
    let mut byte = [0u8; 1];
    recv_exact_timeout(transport, clock, timeout, &mut byte)?;
    Ok(byte[0])
}

/// Fills `buffer` completely. The timeout bounds the silence between
/// deliveries, so a long transfer that keeps making progress never
/// expires.
pub fn recv_exact_timeout<T: Transport, C: Now>(
    transport: &mut T,
    clock: &C,
    timeout: Milliseconds,
    buffer: &mut [u8],
) -> Result<(), Error> {
    let mut filled = 0;
    while filled < buffer.len() {
        let received = poll_until(clock, timeout, || {
            let count = transport.recv(&mut buffer[filled..])?;
            Ok::<_, T::Error>((count > 0).then(|| count))
        })?;
        filled += received.ok_or(Error::Timeout)?;
    }
    Ok(())
}

/// Waits for a little endian `u32` field.
pub fn recv_u32_timeout<T: Transport, C: Now>(
    transport: &mut T,
    clock: &C,
    timeout: Milliseconds,
) -> Result<u32, Error> {
    let mut bytes = [0u8; 4];
    recv_exact_timeout(transport, clock, timeout, &mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}
