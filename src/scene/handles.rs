//! Scene graph seam: where the engine writes drawer and folder transforms.

use glam::Vec3;
use rustc_hash::FxHashMap;

use super::layout::{CabinetLayout, ItemId};

/// Node the engine animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    /// Drawer body, by index.
    Drawer(usize),
    /// Folder, positioned relative to its drawer.
    Folder(ItemId),
}

/// Local transform of a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// Position relative to the parent.
    pub position: Vec3,
    /// Euler rotation (x = pitch, y = yaw, z = roll), radians.
    pub rotation: Vec3,
}

impl Transform {
    /// Unrotated transform at `position`.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }
}

/// Mutable access to the transforms of the embedding scene.
///
/// A node may not exist yet (e.g. its mesh is still loading); the engine
/// skips it for that frame and retries on the next.
pub trait SceneHandles {
    /// Transform of `node`, if the node exists.
    fn transform_mut(&mut self, node: NodeId) -> Option<&mut Transform>;
}

/// Map-backed [`SceneHandles`] for headless use and tests.
#[derive(Debug, Clone, Default)]
pub struct SceneNodes {
    nodes: FxHashMap<NodeId, Transform>,
}

impl SceneNodes {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scene with one node per drawer and folder of `layout`, all at rest.
    #[must_use]
    pub fn from_layout(layout: &CabinetLayout) -> Self {
        let mut nodes = Self::new();
        for drawer in layout.drawers() {
            nodes.insert(
                NodeId::Drawer(drawer.index),
                Transform::at(drawer.origin),
            );
        }
        for folder in layout.folders() {
            nodes.insert(NodeId::Folder(folder.id), Transform::at(folder.rest));
        }
        nodes
    }

    /// Register (or replace) a node.
    pub fn insert(&mut self, node: NodeId, transform: Transform) {
        let _ = self.nodes.insert(node, transform);
    }

    /// Remove a node. Returns its last transform.
    pub fn remove(&mut self, node: NodeId) -> Option<Transform> {
        self.nodes.remove(&node)
    }

    /// Transform of `node`, if present.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<&Transform> {
        self.nodes.get(&node)
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no nodes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl SceneHandles for SceneNodes {
    fn transform_mut(&mut self, node: NodeId) -> Option<&mut Transform> {
        self.nodes.get_mut(&node)
    }
}
