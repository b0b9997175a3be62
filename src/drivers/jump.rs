//! Transfer of control to an application image.
use crate::hal::flash::Address;
use core::mem::size_of;
use cortex_m::peripheral::SCB;

/// Jumps into the image whose vector table starts at `image_base`: the
/// first word is its initial stack pointer, the second its reset handler.
///
/// # Safety
///
/// The image must have been validated, and every peripheral and clock the
/// bootloader touched must already be back in its reset state.
pub unsafe fn transfer_control(image_base: Address) -> ! {
    let base: usize = image_base.into();

    // NOTE(Safety): Thoroughly unsafe operations, for obvious reasons: We are jumping to an
    // entirely different firmware image. After interrupts are disabled there is no turning
    // back, and from here on the vector table must be exactly where the metadata says.
    cortex_m::interrupt::disable();
    let initial_stack_pointer = core::ptr::read_volatile(base as *const u32);
    let reset_handler_pointer = core::ptr::read_volatile((base + size_of::<u32>()) as *const u32) as *const ();
    let reset_handler = core::mem::transmute::<*const (), extern "C" fn() -> !>(reset_handler_pointer);
    (*SCB::PTR).vtor.write(base as u32);
    #[allow(deprecated)]
    cortex_m::register::msp::write(initial_stack_pointer);
    reset_handler()
}
