//! Compute-once slots.
//!
//! A [`Memo`] holds a value that is produced on first access and then reused
//! for the lifetime of its owner. It is the building block for every lazily
//! evaluated quantity in the cycle model: flow-state derived properties,
//! component outflows, and the engine's per-component cache.
//!
//! A filled slot is never invalidated. Owners that expose mutable parameters
//! must document that later mutation does not reach values already cached.

use std::cell::OnceCell;

#[derive(Debug, Clone)]
pub struct Memo<T> {
    cell: OnceCell<T>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Memo<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the cached value, computing it with `f` on first access.
    ///
    /// If `f` fails, the slot stays empty and the error is returned; the next
    /// access retries.
    pub fn get_or_try_init<E>(&self, f: impl FnOnce() -> Result<T, E>) -> Result<&T, E> {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }
        let value = f()?;
        Ok(self.cell.get_or_init(|| value))
    }

    /// The cached value, if it was already computed.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_filled(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T: Copy> Memo<T> {
    /// Copy-out variant of [`Memo::get_or_try_init`] for scalar caches.
    pub fn value_or_try_init<E>(&self, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        self.get_or_try_init(f).copied()
    }
}
