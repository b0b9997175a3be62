//! Millisecond clock driven by the Cortex-M SysTick exception.
use crate::hal::time::{self, Instant, Milliseconds, Now};
use core::sync::atomic::{AtomicU32, Ordering};

/// Milliseconds since the clock was started. Only `on_tick` advances it.
static TICKS: AtomicU32 = AtomicU32::new(0);

/// Opaque wrapper around the tick counter at a point in time
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tick(u32);

impl Instant for Tick {}

/// Tick subtraction to obtain a time period. Survives counter wraparound.
impl core::ops::Sub for Tick {
    type Output = Milliseconds;
    fn sub(self, rhs: Self) -> Milliseconds { Milliseconds(self.0.wrapping_sub(rhs.0)) }
}

impl core::ops::Add<Milliseconds> for Tick {
    type Output = Self;
    fn add(self, rhs: Milliseconds) -> Self { Tick(self.0.wrapping_add(rhs.0)) }
}

/// SysTick reload value for a 1 kHz interrupt from the core clock.
pub const fn reload_for(core_clock: time::Hertz) -> u32 { core_clock.0 / 1000 - 1 }

pub struct SysTickClock {
    #[cfg(target_arch = "arm")]
    syst: cortex_m::peripheral::SYST,
}

#[cfg(target_arch = "arm")]
impl SysTickClock {
    pub fn start(mut syst: cortex_m::peripheral::SYST, core_clock: time::Hertz) -> Self {
        use cortex_m::peripheral::syst::SystClkSource;
        TICKS.store(0, Ordering::Relaxed);
        syst.set_clock_source(SystClkSource::Core);
        syst.set_reload(reload_for(core_clock));
        syst.clear_current();
        syst.enable_interrupt();
        syst.enable_counter();
        Self { syst }
    }

    /// Stops the counter and its exception so the application starts
    /// without a pending SysTick.
    pub fn stop(mut self) -> cortex_m::peripheral::SYST {
        self.syst.disable_interrupt();
        self.syst.disable_counter();
        self.syst
    }
}

impl Now for SysTickClock {
    type I = Tick;
    fn now(&self) -> Tick { Tick(TICKS.load(Ordering::Relaxed)) }
}

/// Advances the clock by one millisecond. Called from the SysTick
/// exception handler the binary installs.
pub fn on_tick() { TICKS.fetch_add(1, Ordering::Relaxed); }
