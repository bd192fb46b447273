//! Caller-owned lazy services.
//!
//! Expensive shared helpers (the kind catalogue, renderer-side caches) are
//! held in a `ServiceCell` owned by whoever needs them instead of living in
//! module statics. The value is built on first use and can be dropped with
//! `reset()` so tests start from a clean slate.

use once_cell::unsync::OnceCell;
use std::fmt;

pub struct ServiceCell<T> {
    cell: OnceCell<T>,
    init: fn() -> T,
}

impl<T> ServiceCell<T> {
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: OnceCell::new(),
            init,
        }
    }

    /// Get the service, constructing it on first access.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(self.init)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Drop the cached value; the next `get` rebuilds it.
    pub fn reset(&mut self) {
        if self.cell.take().is_some() {
            tracing::debug!("service cell reset");
        }
    }
}

impl<T: Default> Default for ServiceCell<T> {
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T: fmt::Debug> fmt::Debug for ServiceCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCell").field("value", &self.cell.get()).finish()
    }
}
