//! Placement applied to an instance when it leaves a pool

use crate::foundation::math::{Quat, Vec3};

/// Where a leased instance should appear
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<P> {
    /// Position relative to `parent` (world space when unparented)
    pub position: Vec3,
    /// Orientation
    pub rotation: Quat,
    /// Container to attach to, `None` for the scene root
    pub parent: Option<P>,
}

impl<P> Placement<P> {
    /// Unparented placement
    pub fn at(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            parent: None,
        }
    }

    /// Builder pattern: Attach to a parent
    pub fn with_parent(mut self, parent: P) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl<P> Default for Placement<P> {
    fn default() -> Self {
        Self::at(Vec3::zeros(), Quat::identity())
    }
}
