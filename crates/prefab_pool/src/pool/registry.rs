//! Pool registry
//!
//! Maps kinds to their pools and remembers which pool every leased instance
//! came from, so callers only ever deal in kinds and instances.
//!
//! **Invariants**:
//! - one pool per kind, fixed at [`PoolRegistry::initialize`]
//! - an instance is either idle in exactly one pool or present in the lease
//!   map, never both

use super::error::PoolError;
use super::host::PoolHost;
use super::placement::Placement;
use super::resource_pool::ResourcePool;
use super::stats::RegistryStats;
use crate::foundation::math::{Quat, Vec3};
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Startup description of one pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolDescriptor<K, P> {
    /// Kind the pool is registered under
    pub kind: K,
    /// Template instances are cloned from
    pub prototype: P,
    /// Instances built up front
    pub initial_capacity: usize,
}

impl<K, P> PoolDescriptor<K, P> {
    /// Create a descriptor
    pub fn new(kind: K, prototype: P, initial_capacity: usize) -> Self {
        Self {
            kind,
            prototype,
            initial_capacity,
        }
    }
}

/// Registry of per-kind pools with lease tracking
///
/// Constructed once at startup and passed explicitly to whoever spawns pooled
/// objects. The host is borrowed per call rather than owned.
pub struct PoolRegistry<K, H: PoolHost> {
    /// One pool per configured kind
    pools: HashMap<K, ResourcePool<K, H>>,
    /// Currently leased instances and the kind of the pool that owns them
    leased: HashMap<H::Instance, K>,
}

impl<K, H> PoolRegistry<K, H>
where
    K: Clone + Eq + Hash + Debug,
    H: PoolHost,
{
    /// Create and pre-warm one pool per descriptor
    ///
    /// Duplicate kinds are rejected before any instance is built.
    pub fn initialize<I>(host: &mut H, descriptors: I) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = PoolDescriptor<K, H::Prototype>>,
    {
        let descriptors: Vec<_> = descriptors.into_iter().collect();

        {
            let mut seen = HashSet::with_capacity(descriptors.len());
            if let Some(duplicate) = descriptors.iter().find(|d| !seen.insert(&d.kind)) {
                return Err(PoolError::duplicate_kind(&duplicate.kind));
            }
        }

        let mut pools = HashMap::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let pool = ResourcePool::new(
                descriptor.kind.clone(),
                descriptor.prototype,
                descriptor.initial_capacity,
                host,
            );
            pools.insert(descriptor.kind, pool);
        }

        log::info!("Initialized pool registry with {} pools", pools.len());
        Ok(Self {
            pools,
            leased: HashMap::new(),
        })
    }

    /// Lease an instance of `kind`
    ///
    /// # Returns
    /// * `Ok(instance)` - Placed, active instance; the pool grows if it was empty
    /// * `Err(PoolError::UnknownKind)` - No pool for `kind`; nothing changed
    /// * `Err(PoolError::AlreadyLeased)` - The host built an instance that is
    ///   still out on lease; the live instance and the pool counters are untouched
    pub fn get<Q>(&mut self, host: &mut H, kind: &Q, placement: Placement<H::Parent>) -> Result<H::Instance, PoolError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let pool = self
            .pools
            .get_mut(kind)
            .ok_or_else(|| PoolError::unknown_kind(&kind))?;

        let (instance, grown) = pool.take(host);

        match self.leased.entry(instance.clone()) {
            Entry::Occupied(_) => Err(PoolError::already_leased(&instance)),
            Entry::Vacant(slot) => {
                pool.prepare(&instance, grown, &placement, host);
                slot.insert(pool.kind().clone());
                log::debug!("Leased {:?} from pool {:?}", instance, kind);
                Ok(instance)
            }
        }
    }

    /// Lease an unparented instance at `position` / `rotation`
    pub fn get_at<Q>(&mut self, host: &mut H, kind: &Q, position: Vec3, rotation: Quat) -> Result<H::Instance, PoolError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.get(host, kind, Placement::at(position, rotation))
    }

    /// Return a leased instance to the pool it came from
    ///
    /// The instance is attached to `parent` (or detached) and deactivated.
    ///
    /// # Returns
    /// * `Ok(())` - Instance is idle again
    /// * `Err(PoolError::NotLeased)` - Never leased or already returned; nothing changed
    pub fn return_instance(
        &mut self,
        host: &mut H,
        instance: &H::Instance,
        parent: Option<&H::Parent>,
    ) -> Result<(), PoolError> {
        let kind = self
            .leased
            .get(instance)
            .ok_or_else(|| PoolError::not_leased(instance))?;
        let pool = self
            .pools
            .get_mut(kind)
            .ok_or_else(|| PoolError::unknown_kind(kind))?;

        self.leased.remove(instance);
        pool.release(instance.clone(), parent, host);

        log::debug!("Returned {:?} to pool {:?}", instance, pool.kind());
        Ok(())
    }

    /// Whether a pool is registered for `kind`
    pub fn contains_kind<Q>(&self, kind: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.pools.contains_key(kind)
    }

    /// Registered kinds, in no particular order
    pub fn kinds(&self) -> impl Iterator<Item = &K> {
        self.pools.keys()
    }

    /// Pool registered for `kind`
    pub fn pool<Q>(&self, kind: &Q) -> Option<&ResourcePool<K, H>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.pools.get(kind)
    }

    /// Idle instances in the pool for `kind`
    pub fn idle_count<Q>(&self, kind: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.pools.get(kind).map(ResourcePool::idle_count)
    }

    /// Number of instances currently leased
    pub fn leased_count(&self) -> usize {
        self.leased.len()
    }

    /// Whether `instance` is currently leased
    pub fn is_leased(&self, instance: &H::Instance) -> bool {
        self.leased.contains_key(instance)
    }

    /// Kind of the pool a leased instance belongs to
    pub fn owner_of(&self, instance: &H::Instance) -> Option<&K> {
        self.leased.get(instance)
    }

    /// Currently leased instances
    pub fn leased(&self) -> impl Iterator<Item = &H::Instance> {
        self.leased.keys()
    }

    /// Aggregate counters over all pools
    pub fn stats(&self) -> RegistryStats {
        self.pools.values().fold(
            RegistryStats {
                pools: self.pools.len(),
                leased: self.leased.len(),
                ..RegistryStats::default()
            },
            |mut stats, pool| {
                let pool_stats = pool.stats();
                stats.idle += pool.idle_count();
                stats.created += pool_stats.created;
                stats.grown += pool_stats.grown;
                stats
            },
        )
    }
}
