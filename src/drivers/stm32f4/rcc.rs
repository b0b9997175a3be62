//! Reset and clock control.
//!
//! The bootloader never leaves the internal oscillator it starts on, so
//! all that is needed here is peripheral clock gating and a teardown that
//! returns the clock tree to its reset state before an application starts.
use crate::{
    drivers::Register,
    hal::time::Hertz,
    utilities::bitwise::BitFlags,
};

/// Internal RC oscillator frequency, which drives SYSCLK and both APB
/// buses out of reset.
pub const HSI_FREQUENCY: Hertz = Hertz(16_000_000);

const RCC_BASE: u32 = 0x4002_3800;
const CR: u32 = 0x00;
const PLLCFGR: u32 = 0x04;
const CFGR: u32 = 0x08;
const CIR: u32 = 0x0C;
const AHB1ENR: u32 = 0x30;
const APB1ENR: u32 = 0x40;

const CR_HSION: u32 = 1 << 0;
const CR_HSIRDY: u8 = 1;
const CR_HSEON: u32 = 1 << 16;
const CR_CSSON: u32 = 1 << 19;
const CR_PLLON: u32 = 1 << 24;
const CFGR_SWS_MASK: u32 = 0b11 << 2;
const PLLCFGR_RESET: u32 = 0x2400_3010;
/// Clears every ready flag in CIR, with all clock interrupts disabled.
const CIR_CLEAR_ALL: u32 = 0x00BF_0000;

const AHB1ENR_GPIOAEN: u32 = 1 << 0;
const APB1ENR_USART2EN: u32 = 1 << 17;

fn rcc(offset: u32) -> Register {
    // NOTE(Safety): RCC is a fixed peripheral on every STM32F4, and the
    // bootloader is single threaded.
    unsafe { Register::at(RCC_BASE) }.offset(offset)
}

pub fn enable_gpioa() { rcc(AHB1ENR).set_bits(AHB1ENR_GPIOAEN) }
pub fn enable_usart2() { rcc(APB1ENR).set_bits(APB1ENR_USART2EN) }
pub fn disable_usart2() { rcc(APB1ENR).clear_bits(APB1ENR_USART2EN) }

/// Returns SYSCLK to HSI, switches PLL and HSE off and restores their
/// reset configuration.
pub fn reset_to_hsi() {
    rcc(CR).set_bits(CR_HSION);
    while rcc(CR).read().is_clear(CR_HSIRDY) {}

    rcc(CFGR).write(0);
    while rcc(CFGR).read() & CFGR_SWS_MASK != 0 {}

    rcc(CR).clear_bits(CR_HSEON | CR_CSSON | CR_PLLON);
    rcc(PLLCFGR).write(PLLCFGR_RESET);
    rcc(CIR).write(CIR_CLEAR_ALL);
    rcc(AHB1ENR).clear_bits(AHB1ENR_GPIOAEN);
}
