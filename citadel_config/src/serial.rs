use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interface {
    Uart,
    Usb,
    Spi,
    I2c,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Framing {
    /// Bytes travel as-is.
    Raw,
    /// Every transmission ends with a `\n`, and received data is held
    /// back until a `\n` arrives.
    LineTerminated,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialConfiguration {
    pub interface: Interface,
    pub baud_rate: u32,
    pub framing: Framing,
}

impl Default for SerialConfiguration {
    fn default() -> Self { Self { interface: Interface::Uart, baud_rate: 115_200, framing: Framing::Raw } }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfiguration {
    /// How long to wait for the host to request an update before booting.
    pub decision_ms: u32,
    /// Bound on every individual read while receiving an image.
    pub receive_ms: u32,
}

impl Default for TimeoutConfiguration {
    fn default() -> Self { Self { decision_ms: 10_000, receive_ms: 5_000 } }
}
