//! Process-wide storage for a single registered instance.

use std::sync::{Arc, Mutex, PoisonError};

use crate::RegistryError;

/// Holds zero or one instance.
///
/// `Slot::new` is `const`, so a slot can back a `static` directly:
///
/// ```rust
/// use singleton_family::Slot;
///
/// static SLOT: Slot<String> = Slot::new();
/// assert!(!SLOT.is_occupied());
/// ```
///
/// Lock poisoning is recovered on every path. The stored `Option` is only
/// written after a constructor has returned, so a panicking constructor
/// leaves the slot empty rather than half-initialised.
pub struct Slot<T: ?Sized> {
    cell: Mutex<Option<Arc<T>>>,
}

impl<T: ?Sized> Slot<T> {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self {
            cell: Mutex::new(None),
        }
    }

    /// Returns a handle to the stored instance without creating one.
    pub fn peek(&self) -> Option<Arc<T>> {
        self.cell
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns `true` if an instance is stored.
    pub fn is_occupied(&self) -> bool {
        self.cell
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Returns the stored instance, or runs `init` and stores its result.
    ///
    /// The check and the store happen under one lock, so concurrent first
    /// callers construct exactly one instance. The boolean is `true` when
    /// this call performed the construction.
    ///
    /// `init` runs while the lock is held and must not touch this slot.
    pub(crate) fn get_or_try_init<F>(&self, init: F) -> Result<(Arc<T>, bool), RegistryError>
    where
        F: FnOnce() -> Result<Arc<T>, RegistryError>,
    {
        let mut guard = self.cell.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = guard.as_ref() {
            return Ok((Arc::clone(existing), false));
        }

        let created = init()?;
        *guard = Some(Arc::clone(&created));
        Ok((created, true))
    }

    /// Empties the slot, returning what it held.
    pub(crate) fn take(&self) -> Option<Arc<T>> {
        self.cell
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl<T: ?Sized> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("occupied", &self.is_occupied())
            .finish()
    }
}
