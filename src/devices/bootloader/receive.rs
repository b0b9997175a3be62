//! Receiving an image over the transport.
use super::*;
use crate::log::trace;
use core::cmp::min;

impl<F: Flash, T: Transport, C: Now> Bootloader<F, T, C> {
    /// Runs the length prefixed upload handshake, writing the firmware and
    /// its signature into the bank `mode` selects. Nothing is committed to
    /// metadata here except the invalidation a forced update requires.
    pub(super) fn receive(&mut self, mode: Mode) -> Result<Image, Error> {
        let bank = match mode {
            Mode::Staged => self.settings.memory.staging,
            Mode::Forced => self.settings.memory.active,
        };
        info!("Receiving {:?} image at {:?}", mode, bank.location);

        self.expect_command(protocol::START)?;
        self.acknowledge(protocol::START_ACK)?;

        let size = self.recv_u32()? as usize;
        if size > bank.max_image_size {
            return Err(Error::ImageTooBig);
        }
        self.acknowledge(protocol::SIZE_ACK)?;

        self.expect_command(protocol::ERASE)?;
        if mode == Mode::Forced {
            // The active image is about to be destroyed.
            self.invalidate_metadata()?;
        }
        let span = min(bank.size, (bank.location + size).align_up() - bank.location + protocol::MAX_SIGNATURE_SIZE);
        erase_range(&mut self.flash, bank.location, span)?;
        self.acknowledge(protocol::ERASE_ACK)?;

        self.receive_blocks(bank.location, size, protocol::CHUNK_ACK)?;

        self.expect_command(protocol::SIGNATURE)?;
        self.acknowledge(protocol::SIGNATURE_ACK)?;
        let signature_length = self.recv_u32()? as usize;
        if signature_length > protocol::MAX_SIGNATURE_SIZE {
            return Err(Error::InvalidInput);
        }
        self.acknowledge(protocol::SIGNATURE_ACK)?;

        let image = bank.image(size, signature_length);
        self.receive_blocks(image.signature_location, signature_length, protocol::SIGNATURE_ACK)?;
        info!("Received {:?} bytes of firmware", size as u32);
        Ok(image)
    }

    /// Receives `length` bytes in chunks, programming and acknowledging
    /// each one before the host may send the next.
    fn receive_blocks(&mut self, start: Address, length: usize, ack: u8) -> Result<(), Error> {
        let mut buffer = [0u8; protocol::CHUNK_SIZE];
        let mut offset = 0;
        while offset < length {
            let chunk = &mut buffer[..min(protocol::CHUNK_SIZE, length - offset)];
            comm::recv_exact_timeout(&mut self.transport, &self.clock, self.settings.receive_timeout, chunk)?;
            block!(self.flash.write_block(start + offset, chunk)).map_err(|_| Error::FlashWriteFailed)?;
            offset += chunk.len();
            trace!("{:?}/{:?}", offset as u32, length as u32);
            self.acknowledge(ack)?;
        }
        Ok(())
    }

    fn expect_command(&mut self, command: u8) -> Result<(), Error> {
        match comm::recv_byte_timeout(&mut self.transport, &self.clock, self.settings.receive_timeout)? {
            byte if byte == command => Ok(()),
            byte => Err(Error::InvalidCommand(byte)),
        }
    }

    fn recv_u32(&mut self) -> Result<u32, Error> {
        comm::recv_u32_timeout(&mut self.transport, &self.clock, self.settings.receive_timeout)
    }

    fn acknowledge(&mut self, ack: u8) -> Result<(), Error> {
        self.transport.send(&[ack])?;
        Ok(())
    }
}
