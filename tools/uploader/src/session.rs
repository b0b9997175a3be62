use crate::error::{Error, Stage};
use citadel_lib::devices::protocol::{self, Decision};
use std::{
    io::{self, Read, Write},
    time::{Duration, Instant},
};

/// How long the session waits at each point of the exchange.
#[derive(Clone, Copy, Debug)]
pub struct Timeouts {
    /// Stale input is discarded for this long before anything is sent.
    pub flush: Duration,
    /// Maximum wait for the boot finished byte.
    pub boot: Duration,
    /// Maximum wait for each acknowledgement.
    pub ack: Duration,
    /// Device text is collected until the line stays quiet this long.
    pub settle: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            flush: Duration::from_millis(500),
            boot: Duration::from_secs(10),
            ack: Duration::from_secs(10),
            settle: Duration::from_secs(2),
        }
    }
}

/// Host side of one firmware upload over any byte stream.
pub struct Session<P: Read + Write> {
    port: P,
    timeouts: Timeouts,
    /// Text the device printed while we waited for acknowledgements.
    device_text: Vec<u8>,
}

impl<P: Read + Write> Session<P> {
    pub fn new(port: P, timeouts: Timeouts) -> Self { Self { port, timeouts, device_text: Vec::new() } }

    /// Runs the full exchange and returns whatever the device printed after
    /// the last acknowledgement.
    pub fn upload(&mut self, firmware: &[u8], signature: &[u8]) -> Result<String, Error> {
        self.flush();
        if !self.wait_for_boot() {
            println!("No boot signal seen, sending the update request anyway.");
        }

        self.send(&[Decision::UPDATE], Stage::Decision)?;
        self.expect(protocol::UPDATE_ACK, Stage::Decision)?;
        print_text(&std::mem::take(&mut self.device_text));

        self.send(&[protocol::START], Stage::Start)?;
        self.expect(protocol::START_ACK, Stage::Start)?;

        self.send(&(firmware.len() as u32).to_le_bytes(), Stage::Size)?;
        self.expect(protocol::SIZE_ACK, Stage::Size)?;

        println!("Erasing...");
        self.send(&[protocol::ERASE], Stage::Erase)?;
        self.expect(protocol::ERASE_ACK, Stage::Erase)?;

        let chunks = firmware.chunks(protocol::CHUNK_SIZE).count();
        for (index, chunk) in firmware.chunks(protocol::CHUNK_SIZE).enumerate() {
            self.send(chunk, Stage::Chunk(index))?;
            self.expect(protocol::CHUNK_ACK, Stage::Chunk(index))?;
            println!("Sent chunk {}/{}", index + 1, chunks);
        }

        self.send(&[protocol::SIGNATURE], Stage::Signature)?;
        self.expect(protocol::SIGNATURE_ACK, Stage::Signature)?;
        self.send(&(signature.len() as u32).to_le_bytes(), Stage::SignatureSize)?;
        self.expect(protocol::SIGNATURE_ACK, Stage::SignatureSize)?;
        for (index, chunk) in signature.chunks(protocol::CHUNK_SIZE).enumerate() {
            self.send(chunk, Stage::SignatureChunk(index))?;
            self.expect(protocol::SIGNATURE_ACK, Stage::SignatureChunk(index))?;
        }
        println!("Signature sent.");

        self.settle();
        let text = String::from_utf8_lossy(&std::mem::take(&mut self.device_text)).into_owned();
        if text.contains(protocol::FAILED_MESSAGE) || text.contains("Error]") {
            return Err(Error::DeviceReported(text));
        }
        Ok(text)
    }

    #[cfg(test)]
    pub fn into_port(self) -> P { self.port }

    /// Discards anything already sitting in the receive buffer.
    fn flush(&mut self) {
        let deadline = Instant::now() + self.timeouts.flush;
        let mut scratch = [0u8; 64];
        while Instant::now() < deadline {
            match self.port.read(&mut scratch) {
                Ok(_) => {}
                Err(e) if is_quiet(&e) => {}
                Err(_) => break,
            }
        }
    }

    fn wait_for_boot(&mut self) -> bool {
        let deadline = Instant::now() + self.timeouts.boot;
        while Instant::now() < deadline {
            match self.read_byte() {
                Ok(Some(protocol::BOOT_FINISHED)) => return true,
                Ok(_) => {}
                Err(_) => return false,
            }
        }
        false
    }

    fn send(&mut self, bytes: &[u8], stage: Stage) -> Result<(), Error> {
        self.port.write_all(bytes).and_then(|_| self.port.flush()).map_err(|_| Error::WriteFailed(stage))
    }

    /// Waits for `ack`. Printable device output received meanwhile is kept
    /// for later display, any other byte is a protocol violation.
    fn expect(&mut self, ack: u8, stage: Stage) -> Result<(), Error> {
        let deadline = Instant::now() + self.timeouts.ack;
        while Instant::now() < deadline {
            match self.read_byte().map_err(|_| Error::ReadFailed(stage))? {
                Some(byte) if byte == ack => return Ok(()),
                Some(byte) if is_text(byte) => self.device_text.push(byte),
                Some(protocol::BOOT_FINISHED) if stage == Stage::Decision => {}
                Some(byte) => return Err(Error::UnexpectedReply { stage, expected: ack, received: byte }),
                None => {}
            }
        }
        if !self.device_text.is_empty() {
            let text = String::from_utf8_lossy(&self.device_text).into_owned();
            eprintln!("Device output: {}", text.trim());
        }
        Err(Error::AckTimeout(stage))
    }

    /// Collects device text until the line has been quiet for a while.
    fn settle(&mut self) {
        let mut last_activity = Instant::now();
        while last_activity.elapsed() < self.timeouts.settle {
            match self.read_byte() {
                Ok(Some(byte)) => {
                    self.device_text.push(byte);
                    last_activity = Instant::now();
                }
                Ok(None) => {}
                Err(_) => break,
            }
        }
    }

    /// Reads at most one byte. `Ok(None)` means the port had nothing yet.
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.port.read(&mut byte) {
            Ok(1) => Ok(Some(byte[0])),
            Ok(_) => Ok(None),
            Err(e) if is_quiet(&e) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

fn is_quiet(error: &io::Error) -> bool {
    matches!(error.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted)
}

fn is_text(byte: u8) -> bool { byte.is_ascii_graphic() || byte.is_ascii_whitespace() }

fn print_text(bytes: &[u8]) {
    let text = String::from_utf8_lossy(bytes);
    if !text.trim().is_empty() {
        println!("{}", text.trim());
    }
}
