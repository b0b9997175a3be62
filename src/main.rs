#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

#[cfg(all(target_arch = "arm", feature = "defmt"))]
use defmt_rtt as _;
#[cfg(target_arch = "arm")]
use panic_halt as _;

#[cfg(target_arch = "arm")]
#[cortex_m_rt::entry]
fn main() -> ! {
    match cortex_m::Peripherals::take() {
        Some(core) => citadel_lib::ports::stm32f4::run(core),
        None => loop {
            cortex_m::asm::wfi();
        },
    }
}

#[cfg(target_arch = "arm")]
#[cortex_m_rt::exception]
fn SysTick() { citadel_lib::drivers::systick::on_tick(); }

#[cfg(not(target_arch = "arm"))]
fn main() {}
