use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum File {
    Firmware,
    Signature,
}

impl Display for File {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        use File::*;
        match self {
            Firmware => write!(f, "firmware"),
            Signature => write!(f, "signature"),
        }
    }
}

/// Protocol phase an acknowledgement belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Decision,
    Start,
    Size,
    Erase,
    Chunk(usize),
    Signature,
    SignatureSize,
    SignatureChunk(usize),
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        use Stage::*;
        match self {
            Decision => write!(f, "update decision"),
            Start => write!(f, "start command"),
            Size => write!(f, "firmware size"),
            Erase => write!(f, "erase command"),
            Chunk(index) => write!(f, "firmware chunk {}", index),
            Signature => write!(f, "signature command"),
            SignatureSize => write!(f, "signature size"),
            SignatureChunk(index) => write!(f, "signature chunk {}", index),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    FileReadFailed(File),
    EmptyFile(File),
    SignatureTooLong(usize),
    PortOpenFailed(String),
    WriteFailed(Stage),
    ReadFailed(Stage),
    AckTimeout(Stage),
    UnexpectedReply { stage: Stage, expected: u8, received: u8 },
    DeviceReported(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        use Error::*;
        match self {
            FileReadFailed(file) => write!(f, "Failed to read {} file.", file),
            EmptyFile(file) => write!(f, "The {} file is empty.", file),
            SignatureTooLong(length) => {
                write!(f, "Signature is {} bytes long, the bootloader accepts at most {}.", length,
                    citadel_lib::devices::protocol::MAX_SIGNATURE_SIZE)
            }
            PortOpenFailed(reason) => write!(f, "Failed to open serial port: {}", reason),
            WriteFailed(stage) => write!(f, "Failed to send {}.", stage),
            ReadFailed(stage) => write!(f, "Failed to read the reply to {}.", stage),
            AckTimeout(stage) => write!(f, "Timed out waiting for the device to acknowledge {}.", stage),
            UnexpectedReply { stage, expected, received } => write!(
                f,
                "Unexpected reply to {}: expected {:#04x}, received {:#04x}.",
                stage, expected, received
            ),
            DeviceReported(text) => write!(f, "The device reported a failure: {}", text.trim()),
        }
    }
}
