//! STM32F412 port: internal flash, USART2 and SysTick.
use crate::{
    config,
    devices::{
        bootloader::{Bootloader, Outcome},
        comm,
    },
    drivers::{
        jump::transfer_control,
        stm32f4::{
            flash::McuFlash,
            rcc::{self, HSI_FREQUENCY},
            usart::Usart,
        },
        systick::SysTickClock,
    },
    hal::time::U32Ext,
    log::{error, info},
};

/// Runs one boot cycle and either jumps into the accepted image or halts.
pub fn run(core: cortex_m::Peripherals) -> ! {
    let clock = SysTickClock::start(core.SYST, HSI_FREQUENCY);

    // NOTE(Safety): This is the only place the flash controller and USART2
    // are instantiated.
    let (flash, port) = unsafe { (McuFlash::new(), Usart::usart2(config::BAUD_RATE.bps(), HSI_FREQUENCY)) };
    let transport = match comm::select(config::INTERFACE, port, config::FRAMING) {
        Ok(transport) => transport,
        Err(e) => {
            error!("Transport selection failed: {:?}", e);
            halt()
        }
    };

    let mut bootloader = Bootloader::new(flash, transport, clock, config::settings());
    match bootloader.run_cycle() {
        Outcome::Boot(image) => {
            let (_, transport, clock) = bootloader.into_parts();
            info!("Tearing down before jump");
            transport.release().deinit();
            clock.stop();
            rcc::reset_to_hsi();
            // NOTE(Safety): The boot cycle only yields images that passed the
            // metadata gate, and every peripheral used above is back in reset.
            unsafe { transfer_control(image.location) }
        }
        Outcome::Halt(_) => halt(),
    }
}

fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
