//! Prototypes for scene-backed pools

use crate::foundation::math::Transform;

/// Template a scene node is cloned from
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    /// Name given to every clone
    pub name: String,
    /// Initial local transform of every clone
    pub transform: Transform,
}

impl Prototype {
    /// Prototype with an identity transform
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
        }
    }

    /// Builder pattern: Set the template transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}
