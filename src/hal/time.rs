//! Time units and clocks.
use core::ops::{Add, Sub};

/// Abstract point in time.
///
/// Subtracting two instants yields the milliseconds elapsed between them,
/// and adding milliseconds to an instant yields a later one.
pub trait Instant
where
    Self: Copy + Clone,
    Self: Sub<Output = Milliseconds>,
    Self: Add<Milliseconds, Output = Self>,
{
}

/// A monotonic clock.
pub trait Now {
    type I: Instant;
    fn now(&self) -> Self::I;
}

#[derive(Clone, Copy, Debug, PartialOrd, Ord, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Milliseconds(pub u32);

/// Bits per second
#[derive(Clone, Copy, Debug, PartialOrd, PartialEq, Eq)]
pub struct Bps(pub u32);

/// Hertz
#[derive(Clone, Copy, Debug, PartialOrd, PartialEq, Eq)]
pub struct Hertz(pub u32);

/// Extension trait that adds convenience methods to the `u32` type
pub trait U32Ext {
    fn bps(self) -> Bps;
    fn hz(self) -> Hertz;
    fn ms(self) -> Milliseconds;
}

impl U32Ext for u32 {
    fn bps(self) -> Bps { Bps(self) }
    fn hz(self) -> Hertz { Hertz(self) }
    fn ms(self) -> Milliseconds { Milliseconds(self) }
}

/// Polls `condition` until it produces a value or `timeout` elapses.
///
/// This is the only way the bootloader waits: a local spin bounded by the
/// clock, checked once per iteration.
pub fn poll_until<C, T, E, F>(clock: &C, timeout: Milliseconds, mut condition: F) -> Result<Option<T>, E>
where
    C: Now,
    F: FnMut() -> Result<Option<T>, E>,
{
    let start = clock.now();
    loop {
        if let Some(value) = condition()? {
            return Ok(Some(value));
        }
        if clock.now() - start >= timeout {
            return Ok(None);
        }
    }
}
