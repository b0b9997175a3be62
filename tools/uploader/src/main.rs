mod error;
use crate::error::{Error, File};

mod session;
use crate::session::*;

extern crate clap;
use clap::clap_app;

use citadel_lib::devices::protocol::MAX_SIGNATURE_SIZE;
use std::{fs, process, time::Duration};

const DEFAULT_BAUD_RATE: u32 = 115_200;
/// Read timeout of the port itself. Session timeouts are built on top.
const PORT_POLL_INTERVAL: Duration = Duration::from_millis(10);

fn read_file(path: &str, file: File) -> Result<Vec<u8>, Error> {
    let bytes = fs::read(path).map_err(|_| Error::FileReadFailed(file))?;
    match bytes.len() {
        0 => Err(Error::EmptyFile(file)),
        _ => Ok(bytes),
    }
}

fn run(port_name: &str, firmware: &str, signature: &str, baud_rate: u32) -> Result<String, Error> {
    let firmware = read_file(firmware, File::Firmware)?;
    let signature = read_file(signature, File::Signature)?;
    if signature.len() > MAX_SIGNATURE_SIZE {
        return Err(Error::SignatureTooLong(signature.len()));
    }

    let port = serialport::new(port_name, baud_rate)
        .timeout(PORT_POLL_INTERVAL)
        .open()
        .map_err(|e| Error::PortOpenFailed(e.to_string()))?;
    println!("Opened {} at {} baud. Reset the device to start.", port_name, baud_rate);

    Session::new(port, Timeouts::default()).upload(&firmware, &signature)
}

fn main() {
    let matches = clap_app!(app =>
        (name: env!("CARGO_PKG_NAME"))
        (version: env!("CARGO_PKG_VERSION"))
        (about: env!("CARGO_PKG_DESCRIPTION"))
        (@arg port: +required "Serial port the bootloader is attached to.")
        (@arg firmware: +required "Raw firmware binary to upload.")
        (@arg signature: +required "Detached RSA signature of the firmware.")
        (@arg baud: -b --baud +takes_value "Baud rate, 115200 if omitted.")
    ).get_matches();

    // Required arguments are enforced by clap.
    let port = matches.value_of("port").unwrap_or_default();
    let firmware = matches.value_of("firmware").unwrap_or_default();
    let signature = matches.value_of("signature").unwrap_or_default();
    let baud_rate = match matches.value_of("baud").map(str::parse::<u32>) {
        None => DEFAULT_BAUD_RATE,
        Some(Ok(baud_rate)) => baud_rate,
        Some(Err(_)) => {
            eprintln!("Baud rate must be a positive integer.");
            process::exit(1);
        }
    };

    match run(port, firmware, signature, baud_rate) {
        Ok(trailer) => {
            if !trailer.trim().is_empty() {
                println!("{}", trailer.trim());
            }
            println!("Firmware uploaded successfully.");
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
