//! Boundary to the engine that owns the pooled objects

use crate::foundation::math::{Quat, Vec3};
use std::fmt::Debug;
use std::hash::Hash;

/// Host collaborator that builds instances and mutates their scene state
///
/// Pools never touch instance state directly; every activation, placement and
/// reparenting goes through the host. All calls happen on the caller's thread.
pub trait PoolHost {
    /// Template new instances are cloned from
    type Prototype;

    /// Handle to one constructed instance
    type Instance: Clone + Eq + Hash + Debug;

    /// Container an instance can be attached to
    type Parent;

    /// Build a fresh instance from a prototype
    fn instantiate(&mut self, prototype: &Self::Prototype) -> Self::Instance;

    /// Enable or disable an instance
    fn set_active(&mut self, instance: &Self::Instance, active: bool);

    /// Move and orient an instance
    fn apply_placement(&mut self, instance: &Self::Instance, position: Vec3, rotation: Quat);

    /// Attach an instance to `parent`, or detach it when `None`
    fn set_parent(&mut self, instance: &Self::Instance, parent: Option<&Self::Parent>);

    /// Restore the canonical unit scale
    fn reset_scale(&mut self, instance: &Self::Instance);

    /// Non-fatal diagnostic channel
    fn warn(&mut self, message: &str) {
        log::warn!("{}", message);
    }
}
