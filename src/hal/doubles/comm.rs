use super::error::FakeError;
use crate::hal::comm::Transport;
use std::collections::VecDeque;

/// Transport fed from a queue of bytes prepared by the test, which records
/// everything the device sends. Once the queue runs dry, the transport
/// stalls: `recv` keeps returning zero.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    inbound: VecDeque<u8>,
    sent: Vec<u8>,
    /// Upper bound on bytes handed out per `recv`, to exercise partial reads.
    delivery_size: usize,
    initialized: bool,
    pub fail_init: bool,
    pub fail_send: bool,
}

impl ScriptedTransport {
    pub fn new() -> Self { Self { delivery_size: 7, ..Default::default() } }

    pub fn with_script(script: &[u8]) -> Self {
        let mut transport = Self::new();
        transport.queue(script);
        transport
    }

    pub fn queue(&mut self, bytes: &[u8]) { self.inbound.extend(bytes.iter().copied()) }
    pub fn queue_u32(&mut self, value: u32) { self.queue(&value.to_le_bytes()) }

    pub fn sent(&self) -> &[u8] { &self.sent }
    pub fn pending(&self) -> usize { self.inbound.len() }
    pub fn is_initialized(&self) -> bool { self.initialized }

    /// True if `needle` appears anywhere in the sent bytes.
    pub fn has_sent(&self, needle: &[u8]) -> bool {
        self.sent.windows(needle.len()).any(|window| window == needle)
    }
}

impl Transport for ScriptedTransport {
    type Error = FakeError;

    fn init(&mut self) -> Result<(), Self::Error> {
        if self.fail_init {
            return Err(FakeError);
        }
        self.initialized = true;
        Ok(())
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.fail_send {
            return Err(FakeError);
        }
        self.sent.extend_from_slice(bytes);
        Ok(())
    }

    fn recv(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error> {
        let count = buffer.len().min(self.delivery_size).min(self.inbound.len());
        buffer.iter_mut().take(count).for_each(|b| *b = self.inbound.pop_front().unwrap_or(0));
        Ok(count)
    }
}
