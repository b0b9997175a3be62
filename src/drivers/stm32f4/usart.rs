//! Polled USART driver for the STM32F4 family.
use crate::{
    drivers::{stm32f4::rcc, Register},
    hal::{
        comm::SerialPort,
        time::{Bps, Hertz},
    },
    utilities::bitwise::BitFlags,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    Overrun,
    Noise,
    Framing,
    Parity,
}

const USART2_BASE: u32 = 0x4000_4400;
const GPIOA_BASE: u32 = 0x4002_0000;

const SR: u32 = 0x00;
const DR: u32 = 0x04;
const BRR: u32 = 0x08;
const CR1: u32 = 0x0C;

const SR_PE: u8 = 0;
const SR_FE: u8 = 1;
const SR_NE: u8 = 2;
const SR_ORE: u8 = 3;
const SR_RXNE: u8 = 5;
const SR_TXE: u8 = 7;

const CR1_RE: u32 = 1 << 2;
const CR1_TE: u32 = 1 << 3;
const CR1_UE: u32 = 1 << 13;

const GPIO_MODER: u32 = 0x00;
const GPIO_AFRL: u32 = 0x20;
const ALTERNATE_FUNCTION_USART2: u32 = 7;
const TX_PIN: u32 = 2;
const RX_PIN: u32 = 3;

/// Baud rate register value for 16x oversampling.
pub fn baud_divisor(clock: Hertz, baud: Bps) -> u32 { (clock.0 + baud.0 / 2) / baud.0 }

pub struct Usart {
    sr: Register,
    dr: Register,
    cr1: Register,
}

impl Usart {
    /// USART2 on PA2 (TX) and PA3 (RX), 8N1.
    ///
    /// # Safety
    ///
    /// Only one instance may exist, and nothing else may drive GPIOA pins
    /// 2 and 3.
    pub unsafe fn usart2(baud: Bps, clock: Hertz) -> Self {
        rcc::enable_gpioa();
        rcc::enable_usart2();

        let gpioa = Register::at(GPIOA_BASE);
        gpioa.offset(GPIO_MODER).modify(|moder| {
            let cleared = moder & !((0b11 << (TX_PIN * 2)) | (0b11 << (RX_PIN * 2)));
            cleared | (0b10 << (TX_PIN * 2)) | (0b10 << (RX_PIN * 2))
        });
        gpioa.offset(GPIO_AFRL).modify(|afrl| {
            let cleared = afrl & !((0xF << (TX_PIN * 4)) | (0xF << (RX_PIN * 4)));
            cleared
                | (ALTERNATE_FUNCTION_USART2 << (TX_PIN * 4))
                | (ALTERNATE_FUNCTION_USART2 << (RX_PIN * 4))
        });

        let base = Register::at(USART2_BASE);
        let usart = Self { sr: base.offset(SR), dr: base.offset(DR), cr1: base.offset(CR1) };
        base.offset(BRR).write(baud_divisor(clock, baud));
        usart.cr1.write(CR1_UE | CR1_TE | CR1_RE);
        usart
    }

    /// Waits for the last byte to leave, then disables the peripheral and
    /// its clock so the application finds it in reset state.
    pub fn deinit(self) {
        while self.sr.read().is_clear(6) {}
        self.cr1.write(0);
        rcc::disable_usart2();
    }
}

impl SerialPort for Usart {
    type Error = Error;

    fn read_byte(&mut self) -> nb::Result<u8, Error> {
        let sr = self.sr.read();
        let error = if sr.is_set(SR_ORE) {
            Some(Error::Overrun)
        } else if sr.is_set(SR_NE) {
            Some(Error::Noise)
        } else if sr.is_set(SR_FE) {
            Some(Error::Framing)
        } else if sr.is_set(SR_PE) {
            Some(Error::Parity)
        } else {
            None
        };

        if let Some(error) = error {
            // Reading DR after SR clears the flags.
            let _ = self.dr.read();
            Err(nb::Error::Other(error))
        } else if sr.is_set(SR_RXNE) {
            Ok(self.dr.read() as u8)
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Error> {
        if self.sr.read().is_set(SR_TXE) {
            self.dr.write(byte as u32);
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}
