//! Scoped acquire/release around a mutable resource.
//!
//! The flash driver uses it to keep the program/erase interface unlocked
//! exactly as long as an operation runs, on every return path.
//!
//! ```
//! # use citadel_lib::utilities::guard::Guard;
//! let mut locked = true;
//! {
//!     let guard = Guard::new(&mut locked, |l| *l = false, |l| *l = true);
//!     assert!(!*guard.item());
//! }
//! assert!(locked);
//! ```

pub struct Guard<'a, T, G>
where
    G: FnOnce(&mut T),
{
    item: &'a mut T,
    on_exit: Option<G>,
}

impl<'a, T, G> Guard<'a, T, G>
where
    G: FnOnce(&mut T),
{
    /// Runs `on_entry` immediately and defers `on_exit` until the guard drops.
    pub fn new<F: FnOnce(&mut T)>(item: &'a mut T, on_entry: F, on_exit: G) -> Self {
        on_entry(item);
        Self { item, on_exit: Some(on_exit) }
    }

    pub fn item(&self) -> &T { self.item }
    pub fn item_mut(&mut self) -> &mut T { self.item }
}

impl<'a, T, G> Drop for Guard<'a, T, G>
where
    G: FnOnce(&mut T),
{
    fn drop(&mut self) {
        if let Some(on_exit) = self.on_exit.take() {
            on_exit(self.item);
        }
    }
}
