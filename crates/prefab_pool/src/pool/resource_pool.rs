//! Single-kind resource pool
//!
//! Owns the prototype and the FIFO buffer of idle instances for one kind.
//! Instances leave through [`ResourcePool::take`] and [`ResourcePool::prepare`]
//! fully placed and active, and come back through [`ResourcePool::release`]
//! deactivated.

use super::host::PoolHost;
use super::placement::Placement;
use super::stats::PoolStats;
use std::collections::VecDeque;
use std::fmt::{self, Debug};

/// Pool of reusable instances of a single kind
pub struct ResourcePool<K, H: PoolHost> {
    /// Kind this pool is registered under
    kind: K,
    /// Template for growth
    prototype: H::Prototype,
    /// Idle instances, oldest at the front
    idle: VecDeque<H::Instance>,
    /// Capacity requested at construction
    initial_capacity: usize,
    /// Counters for monitoring
    stats: PoolStats,
}

impl<K: Debug, H: PoolHost> ResourcePool<K, H> {
    /// Create a pool and pre-warm it with `initial_capacity` idle instances
    pub(crate) fn new(kind: K, prototype: H::Prototype, initial_capacity: usize, host: &mut H) -> Self {
        let mut pool = Self {
            kind,
            prototype,
            idle: VecDeque::with_capacity(initial_capacity),
            initial_capacity,
            stats: PoolStats::default(),
        };

        for _ in 0..initial_capacity {
            let instance = pool.instantiate(host);
            pool.release(instance, None, host);
        }

        log::info!("Created pool for {:?} with {} pre-warmed instances", pool.kind, initial_capacity);
        pool
    }

    /// Take the oldest idle instance, growing the pool when none is left
    ///
    /// The instance is reparented to `placement.parent`, moved, reset to unit
    /// scale and activated before it is returned.
    #[cfg(test)]
    pub(crate) fn acquire(&mut self, placement: &Placement<H::Parent>, host: &mut H) -> H::Instance {
        let (instance, grown) = self.take(host);
        self.prepare(&instance, grown, placement, host);
        instance
    }

    /// Pop the oldest idle instance, or build one when the buffer is empty
    ///
    /// Nothing is placed or counted yet; the second value tells [`Self::prepare`]
    /// whether the instance is new.
    pub(crate) fn take(&mut self, host: &mut H) -> (H::Instance, bool) {
        match self.idle.pop_front() {
            Some(instance) => (instance, false),
            None => (host.instantiate(&self.prototype), true),
        }
    }

    /// Finish a lease started by [`Self::take`]
    ///
    /// Records growth and warns about it, then reparents, places, resets scale
    /// and activates the instance.
    pub(crate) fn prepare(
        &mut self,
        instance: &H::Instance,
        grown: bool,
        placement: &Placement<H::Parent>,
        host: &mut H,
    ) {
        if grown {
            self.stats.created += 1;
            self.stats.grown += 1;
            host.warn(&format!(
                "Pool for {:?} not large enough, instantiating new object ({} created, initial capacity {})",
                self.kind, self.stats.created, self.initial_capacity
            ));
        }

        host.set_parent(instance, placement.parent.as_ref());
        host.apply_placement(instance, placement.position, placement.rotation);
        host.reset_scale(instance);
        host.set_active(instance, true);

        self.stats.acquired += 1;
    }

    /// Deactivate an instance and queue it behind the other idle instances
    ///
    /// The caller guarantees that `instance` was acquired from this pool and is
    /// not already idle; the registry's lease tracking enforces this.
    pub(crate) fn release(&mut self, instance: H::Instance, parent: Option<&H::Parent>, host: &mut H) {
        host.set_parent(&instance, parent);
        host.set_active(&instance, false);
        self.idle.push_back(instance);
        self.stats.released += 1;
    }

    fn instantiate(&mut self, host: &mut H) -> H::Instance {
        self.stats.created += 1;
        host.instantiate(&self.prototype)
    }
}

impl<K, H: PoolHost> ResourcePool<K, H> {
    /// Kind this pool serves
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Template used when the pool grows
    pub fn prototype(&self) -> &H::Prototype {
        &self.prototype
    }

    /// Number of instances waiting to be leased
    pub fn idle_count(&self) -> usize {
        self.idle.len()
    }

    /// Capacity the pool was pre-warmed with
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Instances ever built by this pool
    pub fn total_created(&self) -> usize {
        self.stats.created
    }

    /// Pool counters
    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    /// Whether `instance` is currently sitting in the idle buffer
    pub fn is_idle(&self, instance: &H::Instance) -> bool {
        self.idle.contains(instance)
    }

    /// Idle instances, next to be leased first
    pub fn idle(&self) -> impl Iterator<Item = &H::Instance> {
        self.idle.iter()
    }
}

impl<K: Debug, H: PoolHost> Debug for ResourcePool<K, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourcePool")
            .field("kind", &self.kind)
            .field("idle", &self.idle)
            .field("initial_capacity", &self.initial_capacity)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
