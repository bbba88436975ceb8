use crate::error::Result;
use std::ops::Deref;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Shared hold on a reader/writer lock that can be traded for an exclusive
/// one. Upgrading releases the shared hold before acquiring the exclusive
/// hold, so a caller never holds both; anything observed under the shared
/// hold must be re-checked after the upgrade.
pub struct SharedHold<'a, T> {
    lock: &'a RwLock<T>,
    guard: RwLockReadGuard<'a, T>,
}

impl<'a, T> SharedHold<'a, T> {
    pub fn acquire(lock: &'a RwLock<T>) -> Self {
        let guard = lock.read().unwrap_or_else(PoisonError::into_inner);
        SharedHold { lock, guard }
    }

    pub fn upgrade(self) -> RwLockWriteGuard<'a, T> {
        let SharedHold { lock, guard } = self;
        drop(guard);
        lock.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Deref for SharedHold<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

#[derive(Debug, Default)]
struct Slot<C> {
    populated: bool,
    records: C,
}

/// A container filled on first demand, at most once per reset epoch.
///
/// Readers of a populated container only ever take the shared hold. The first
/// caller to find it empty upgrades to exclusive, re-checks, and fills it;
/// callers that queued behind that fill observe its result without fetching
/// again. A failed fill leaves the container unpopulated so the next call
/// retries from scratch.
#[derive(Debug)]
pub struct LazyCache<C> {
    name: &'static str,
    slot: RwLock<Slot<C>>,
}

impl<C: Default> LazyCache<C> {
    pub fn new(name: &'static str) -> Self {
        LazyCache {
            name,
            slot: RwLock::new(Slot::default()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_populated(&self) -> bool {
        SharedHold::acquire(&self.slot).populated
    }

    /// Returns `view` of the populated container, running `fill` first if the
    /// container has not been populated this epoch. `fill` must leave the
    /// container untouched when it fails.
    pub fn get_or_fill<R>(
        &self,
        fill: impl FnOnce(&mut C) -> Result<()>,
        view: impl Fn(&C) -> R,
    ) -> Result<R> {
        let shared = SharedHold::acquire(&self.slot);
        if shared.populated {
            return Ok(view(&shared.records));
        }

        let mut slot = shared.upgrade();
        if !slot.populated {
            debug!(client = "data dragon", dataset = self.name, "filling cache");
            fill(&mut slot.records)?;
            slot.populated = true;
        }
        Ok(view(&slot.records))
    }

    /// Looks up a single entry. `cached` is consulted under the shared hold and
    /// again after upgrading; on a miss `fill` runs under the exclusive hold.
    /// Entry fills do not touch the populated flag.
    pub fn get_or_fill_entry<R>(
        &self,
        cached: impl Fn(&C) -> Option<R>,
        fill: impl FnOnce(&mut C) -> Result<R>,
    ) -> Result<R> {
        let shared = SharedHold::acquire(&self.slot);
        if let Some(hit) = cached(&shared.records) {
            return Ok(hit);
        }

        let mut slot = shared.upgrade();
        if let Some(hit) = cached(&slot.records) {
            return Ok(hit);
        }
        fill(&mut slot.records)
    }

    /// Empties the container and clears the populated flag.
    pub fn reset(&self) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Slot::default();
    }
}

impl<C: Default + Clone> LazyCache<C> {
    /// Replaces the container with what `load` returns on first demand and
    /// hands out copies.
    pub fn get_or_load(&self, load: impl FnOnce() -> Result<C>) -> Result<C> {
        self.get_or_fill(
            |records| {
                *records = load()?;
                Ok(())
            },
            C::clone,
        )
    }
}
