//! Slot-map backed scene graph

use super::prototype::Prototype;
use crate::foundation::math::{unit_scale, Mat4, Quat, Transform, Vec3};
use crate::pool::PoolHost;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a scene node
    pub struct NodeId;
}

/// One node in the scene
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Display name (the prototype name for pooled clones)
    pub name: String,
    /// Transform relative to the parent
    pub transform: Transform,
    /// Whether the node itself is enabled
    pub active: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    fn new(name: String, transform: Transform) -> Self {
        Self {
            name,
            transform,
            active: true,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Parent node, `None` at the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct children in attach order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Scene graph of nodes
#[derive(Debug, Default)]
pub struct Scene {
    nodes: SlotMap<NodeId, SceneNode>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active, unparented node (typically a container)
    pub fn create_node(&mut self, name: impl Into<String>) -> NodeId {
        self.nodes.insert(SceneNode::new(name.into(), Transform::identity()))
    }

    /// Look up a node
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    /// Number of nodes in the scene
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes that are enabled themselves and through all their ancestors
    pub fn active_count(&self) -> usize {
        self.nodes.keys().filter(|&id| self.is_active_in_hierarchy(id)).count()
    }

    /// Whether a node and every ancestor are enabled
    pub fn is_active_in_hierarchy(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            match self.nodes.get(node_id) {
                Some(node) if node.active => current = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// Transform of a node in world space
    pub fn world_transform(&self, id: NodeId) -> Option<Transform> {
        let node = self.nodes.get(id)?;
        let local = node.transform.clone();
        match node.parent {
            Some(parent) => Some(self.world_transform(parent)?.combine(&local)),
            None => Some(local),
        }
    }

    /// World matrix of a node (TRS order)
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        self.world_transform(id).map(|transform| transform.to_matrix())
    }

    /// Whether `ancestor` appears on the parent chain of `id`
    fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.nodes.get(id).and_then(SceneNode::parent);
        while let Some(node_id) = current {
            if node_id == ancestor {
                return true;
            }
            current = self.nodes.get(node_id).and_then(SceneNode::parent);
        }
        false
    }

    /// Move a node under `parent`, or to the root when `None`
    ///
    /// Attaching to a missing node or to one of the node's own descendants
    /// detaches it instead.
    pub fn reparent(&mut self, id: NodeId, parent: Option<NodeId>) {
        let Some(old_parent) = self.nodes.get(id).map(SceneNode::parent) else {
            log::error!("Cannot reparent missing node {:?}", id);
            return;
        };

        let parent = parent.filter(|&candidate| {
            let valid = candidate != id && self.nodes.contains_key(candidate) && !self.is_ancestor(id, candidate);
            if !valid {
                log::error!("Refusing to attach {:?} under {:?}; detaching instead", id, candidate);
            }
            valid
        });

        if let Some(old) = old_parent.and_then(|old| self.nodes.get_mut(old)) {
            old.children.retain(|&child| child != id);
        }
        if let Some(new) = parent.and_then(|new| self.nodes.get_mut(new)) {
            new.children.push(id);
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = parent;
        }
    }

    fn with_node(&mut self, id: NodeId, f: impl FnOnce(&mut SceneNode)) {
        match self.nodes.get_mut(id) {
            Some(node) => f(node),
            None => log::error!("Pool touched missing scene node {:?}", id),
        }
    }
}

impl PoolHost for Scene {
    type Prototype = Prototype;
    type Instance = NodeId;
    type Parent = NodeId;

    fn instantiate(&mut self, prototype: &Prototype) -> NodeId {
        self.nodes
            .insert(SceneNode::new(prototype.name.clone(), prototype.transform.clone()))
    }

    fn set_active(&mut self, instance: &NodeId, active: bool) {
        self.with_node(*instance, |node| node.active = active);
    }

    fn apply_placement(&mut self, instance: &NodeId, position: Vec3, rotation: Quat) {
        self.with_node(*instance, |node| {
            node.transform.position = position;
            node.transform.rotation = rotation;
        });
    }

    fn set_parent(&mut self, instance: &NodeId, parent: Option<&NodeId>) {
        self.reparent(*instance, parent.copied());
    }

    fn reset_scale(&mut self, instance: &NodeId) {
        self.with_node(*instance, |node| node.transform.scale = unit_scale());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_instantiate_clones_prototype() {
        let mut scene = Scene::new();
        let prototype = Prototype::named("rock")
            .with_transform(Transform::identity().with_scale(Vec3::new(4.0, 4.0, 4.0)));

        let a = scene.instantiate(&prototype);
        let b = scene.instantiate(&prototype);

        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.node(a).unwrap().name, "rock");
        assert_eq!(scene.node(b).unwrap().transform.scale, Vec3::new(4.0, 4.0, 4.0));
    }

    #[test]
    fn test_reparent_moves_between_children_lists() {
        let mut scene = Scene::new();
        let left = scene.create_node("left");
        let right = scene.create_node("right");
        let child = scene.create_node("child");

        scene.reparent(child, Some(left));
        assert_eq!(scene.node(left).unwrap().children(), &[child]);

        scene.reparent(child, Some(right));
        assert!(scene.node(left).unwrap().children().is_empty());
        assert_eq!(scene.node(right).unwrap().children(), &[child]);
        assert_eq!(scene.node(child).unwrap().parent(), Some(right));

        scene.reparent(child, None);
        assert!(scene.node(right).unwrap().children().is_empty());
        assert_eq!(scene.node(child).unwrap().parent(), None);
    }

    #[test]
    fn test_reparent_under_descendant_detaches() {
        let mut scene = Scene::new();
        let root = scene.create_node("root");
        let child = scene.create_node("child");
        scene.reparent(child, Some(root));

        scene.reparent(root, Some(child));

        assert_eq!(scene.node(root).unwrap().parent(), None);
        assert_eq!(scene.node(child).unwrap().parent(), Some(root));
    }

    #[test]
    fn test_inactive_parent_hides_children() {
        let mut scene = Scene::new();
        let group = scene.create_node("group");
        let child = scene.create_node("child");
        scene.reparent(child, Some(group));

        assert_eq!(scene.active_count(), 2);
        scene.set_active(&group, false);

        assert!(!scene.is_active_in_hierarchy(child));
        assert!(scene.node(child).unwrap().active);
        assert_eq!(scene.active_count(), 0);
    }

    #[test]
    fn test_world_transform_follows_parent() {
        let mut scene = Scene::new();
        let turret = scene.create_node("turret");
        let shell = scene.create_node("shell");
        scene.apply_placement(&turret, Vec3::new(5.0, 0.0, 0.0), Quat::identity());
        scene.set_parent(&shell, Some(&turret));
        scene.apply_placement(&shell, Vec3::new(0.0, 1.0, 0.0), Quat::identity());

        let world = scene.world_transform(shell).unwrap();
        assert_relative_eq!(world.position, Vec3::new(5.0, 1.0, 0.0), epsilon = 1e-6);

        let matrix = scene.world_matrix(shell).unwrap();
        assert_relative_eq!(matrix.m14, 5.0, epsilon = 1e-6);
        assert_relative_eq!(matrix.m24, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_reset_scale() {
        let mut scene = Scene::new();
        let prototype = Prototype::named("big")
            .with_transform(Transform::identity().with_scale(Vec3::new(2.0, 2.0, 2.0)));
        let id = scene.instantiate(&prototype);

        scene.reset_scale(&id);

        assert_eq!(scene.node(id).unwrap().transform.scale, unit_scale());
    }
}
