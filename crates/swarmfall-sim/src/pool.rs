//! Recycle-or-construct allocator for pooled entity kinds.
//!
//! A pool owns only *inactive* instances. `get` moves an instance out to the
//! caller's active list and `release` moves it back, so an instance can never
//! sit in both places or appear twice in the inactive queue.

use std::collections::BTreeMap;

use log::warn;

use swarmfall_core::enums::PoolKind;

use crate::error::PoolError;

/// Hook run when an instance returns to its pool.
pub trait Poolable {
    fn on_release(&mut self) {}
}

type Factory<T> = Box<dyn FnMut() -> T + Send>;

struct Slot<T> {
    inactive: Vec<T>,
    factory: Factory<T>,
    /// Instances ever built by this pool.
    constructed: usize,
}

/// Pools for every kind that shares the instance type `T`.
pub struct EntityPool<T> {
    slots: BTreeMap<PoolKind, Slot<T>>,
}

impl<T: Poolable> Default for EntityPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Poolable> EntityPool<T> {
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Register `kind` and pre-allocate `initial_size` instances.
    ///
    /// Registering a kind twice leaves the existing pool untouched.
    pub fn create_pool<F>(
        &mut self,
        kind: PoolKind,
        mut factory: F,
        initial_size: usize,
    ) -> Result<(), PoolError>
    where
        F: FnMut() -> T + Send + 'static,
    {
        if self.slots.contains_key(&kind) {
            warn!("pool {kind:?} already registered; keeping the existing one");
            return Err(PoolError::AlreadyRegistered(kind));
        }
        let inactive: Vec<T> = (0..initial_size).map(|_| factory()).collect();
        self.slots.insert(
            kind,
            Slot {
                inactive,
                factory: Box::new(factory),
                constructed: initial_size,
            },
        );
        Ok(())
    }

    /// Take an inactive instance, or build a new one when the queue is empty.
    pub fn get(&mut self, kind: PoolKind) -> Result<T, PoolError> {
        let slot = self
            .slots
            .get_mut(&kind)
            .ok_or(PoolError::UnknownKind(kind))?;
        match slot.inactive.pop() {
            Some(item) => Ok(item),
            None => {
                slot.constructed += 1;
                Ok((slot.factory)())
            }
        }
    }

    /// Reset `item` and return it to the inactive queue.
    ///
    /// On an unknown kind the instance is dropped and the error reported.
    pub fn release(&mut self, kind: PoolKind, mut item: T) -> Result<(), PoolError> {
        let slot = self
            .slots
            .get_mut(&kind)
            .ok_or(PoolError::UnknownKind(kind))?;
        item.on_release();
        slot.inactive.push(item);
        Ok(())
    }

    pub fn is_registered(&self, kind: PoolKind) -> bool {
        self.slots.contains_key(&kind)
    }

    /// Number of instances waiting in the inactive queue.
    pub fn inactive_len(&self, kind: PoolKind) -> Option<usize> {
        self.slots.get(&kind).map(|s| s.inactive.len())
    }

    /// Number of instances this pool has ever constructed.
    pub fn constructed(&self, kind: PoolKind) -> Option<usize> {
        self.slots.get(&kind).map(|s| s.constructed)
    }
}
