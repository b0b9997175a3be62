use crate::hal::time::{Instant, Milliseconds, Now};
use core::{
    cell::Cell,
    ops::{Add, Sub},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FakeInstant(pub u32);

impl Instant for FakeInstant {}

impl Sub for FakeInstant {
    type Output = Milliseconds;
    fn sub(self, rhs: Self) -> Milliseconds { Milliseconds(self.0.wrapping_sub(rhs.0)) }
}

impl Add<Milliseconds> for FakeInstant {
    type Output = Self;
    fn add(self, rhs: Milliseconds) -> Self { FakeInstant(self.0.wrapping_add(rhs.0)) }
}

/// Clock that moves forward by a fixed step every time it is read, so
/// that busy waits terminate without real time passing.
pub struct FakeClock {
    current: Cell<u32>,
    step: u32,
}

impl FakeClock {
    pub fn new() -> Self { Self::with_step(Milliseconds(1)) }
    pub fn with_step(step: Milliseconds) -> Self { Self { current: Cell::new(0), step: step.0 } }
    /// Milliseconds elapsed since creation.
    pub fn elapsed(&self) -> Milliseconds { Milliseconds(self.current.get()) }
}

impl Default for FakeClock {
    fn default() -> Self { Self::new() }
}

impl Now for FakeClock {
    type I = FakeInstant;
    fn now(&self) -> FakeInstant {
        let now = self.current.get();
        self.current.set(now.wrapping_add(self.step));
        FakeInstant(now)
    }
}
