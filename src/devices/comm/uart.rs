//! UART transport.
//!
//! Received bytes are drained from the peripheral into a ring buffer owned
//! by the transport, and handed to the protocol from there according to
//! the configured framing.
use super::Framing;
use crate::{
    error::{Convertible, Error as CitadelError},
    hal::comm::{SerialPort, Transport},
};
use heapless::Deque;
use nb::block;

/// Capacity of the receive ring buffer. Two full protocol chunks.
pub const RING_SIZE: usize = 512;

const TERMINATOR: u8 = b'\n';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A line outgrew the ring buffer before its terminator arrived.
    Overrun,
    /// The peripheral reported a framing, noise or parity fault.
    Peripheral,
}

impl Convertible for Error {
    fn into(self) -> CitadelError {
        match self {
            Error::Overrun => CitadelError::CommunicationFailure("UART receive buffer overrun"),
            Error::Peripheral => CitadelError::CommunicationFailure("UART peripheral fault"),
        }
    }
}

pub struct Uart<S: SerialPort> {
    port: S,
    ring: Deque<u8, RING_SIZE>,
    framing: Framing,
}

impl<S: SerialPort> Uart<S> {
    pub fn new(port: S, framing: Framing) -> Self { Self { port, ring: Deque::new(), framing } }

    pub fn framing(&self) -> Framing { self.framing }

    /// Gives the peripheral back, e.g. to deinitialize it before a jump.
    pub fn release(self) -> S { self.port }

    /// Moves every byte the peripheral holds into the ring.
    fn drain(&mut self) -> Result<(), Error> {
        loop {
            match self.port.read_byte() {
                Ok(byte) => {
                    if self.ring.push_back(byte).is_err() {
                        self.ring.clear();
                        return Err(Error::Overrun);
                    }
                }
                Err(nb::Error::WouldBlock) => return Ok(()),
                Err(nb::Error::Other(_)) => return Err(Error::Peripheral),
            }
        }
    }

    /// Bytes that may be handed out right now.
    fn deliverable(&self) -> usize {
        match self.framing {
            Framing::Raw => self.ring.len(),
            Framing::LineTerminated => {
                self.ring.iter().position(|&b| b == TERMINATOR).unwrap_or(0)
            }
        }
    }
}

impl<S: SerialPort> Transport for Uart<S> {
    type Error = Error;

    fn init(&mut self) -> Result<(), Error> {
        self.ring.clear();
        self.drain()?;
        self.ring.clear();
        Ok(())
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), Error> {
        for &byte in bytes {
            block!(self.port.write_byte(byte)).map_err(|_| Error::Peripheral)?;
        }
        if self.framing == Framing::LineTerminated {
            block!(self.port.write_byte(TERMINATOR)).map_err(|_| Error::Peripheral)?;
        }
        Ok(())
    }

    fn recv(&mut self, buffer: &mut [u8]) -> Result<usize, Error> {
        self.drain()?;
        if self.framing == Framing::LineTerminated {
            // Empty lines carry nothing to deliver.
            while self.ring.front() == Some(&TERMINATOR) {
                self.ring.pop_front();
            }
        }
        let available = self.deliverable();
        let count = available.min(buffer.len());
        for slot in buffer.iter_mut().take(count) {
            *slot = self.ring.pop_front().unwrap_or_default();
        }
        if self.framing == Framing::LineTerminated && count > 0 && count == available {
            self.ring.pop_front();
        }
        Ok(count)
    }
}
