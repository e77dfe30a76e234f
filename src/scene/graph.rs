//! Arena scene graph: nodes in a flat slot array, children by index.

use cgmath::{Matrix4, One, Quaternion, SquareMatrix, Vector3, Zero};

use crate::error::PreviewError;
use crate::geometry::GeometryData;

/// Index handle into the scene graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Raw slot index, mainly for diagnostics.
    pub fn index(self) -> u32 {
        self.0
    }
}

/// A node in the scene graph.
///
/// Carries a local transform, an optional name, an optional mesh, and a
/// color tint. Parent/child links are managed by the [`SceneGraph`];
/// a node is referenced by exactly one parent.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Optional human-readable name
    pub name: Option<String>,
    /// Local position relative to the parent
    pub position: Vector3<f32>,
    /// Local orientation relative to the parent
    pub orientation: Quaternion<f32>,
    /// Uniform local scale
    pub scale: f32,
    /// Mesh rendered for this node, if any
    pub geometry: Option<GeometryData>,
    /// Linear RGB tint applied to the mesh
    pub color: [f32; 3],
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl SceneNode {
    /// Create an empty node at the origin
    pub fn new() -> Self {
        Self {
            name: None,
            position: Vector3::zero(),
            orientation: Quaternion::one(),
            scale: 1.0,
            geometry: None,
            color: [1.0, 1.0, 1.0],
            children: Vec::new(),
            parent: None,
        }
    }

    /// Set the node name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the local position
    pub fn with_position(mut self, position: Vector3<f32>) -> Self {
        self.position = position;
        self
    }

    /// Attach a mesh
    pub fn with_geometry(mut self, geometry: GeometryData) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Set the color tint
    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Child ids, in attach order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent id, `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Local transform matrix (translate, rotate, scale)
    pub fn local_transform(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from(self.orientation)
            * Matrix4::from_scale(self.scale)
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat-arena scene graph with a fixed root node.
///
/// Detached slots are recycled; a stale [`NodeId`] resolves to `None` until
/// its slot is reused, so ids must not be held across a detach of their
/// subtree.
pub struct SceneGraph {
    slots: Vec<Option<SceneNode>>,
    free: Vec<u32>,
    root: NodeId,
}

impl SceneGraph {
    /// Create a graph containing only the root node
    pub fn new() -> Self {
        let root = SceneNode::new().with_name("Root");
        Self {
            slots: vec![Some(root)],
            free: Vec::new(),
            root: NodeId(0),
        }
    }

    /// The root node id; always valid
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, including the root
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True when only the root remains
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }

    /// Borrow a node by id
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.slots.get(id.0 as usize).and_then(|s| s.as_ref())
    }

    /// Mutably borrow a node by id
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.slots.get_mut(id.0 as usize).and_then(|s| s.as_mut())
    }

    /// Attach a node under `parent` and return its id.
    ///
    /// A stale or recycled `parent` id yields
    /// [`PreviewError::UnknownNode`] and leaves the graph untouched.
    pub fn attach(&mut self, parent: NodeId, mut node: SceneNode) -> Result<NodeId, PreviewError> {
        if self.node(parent).is_none() {
            return Err(PreviewError::UnknownNode(parent.0));
        }

        node.parent = Some(parent);
        node.children.clear();

        let id = match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize] = Some(node);
                NodeId(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() as u32 - 1)
            }
        };

        if let Some(parent_node) = self.node_mut(parent) {
            parent_node.children.push(id);
        }

        Ok(id)
    }

    /// Detach a node and its whole subtree, recycling their slots.
    ///
    /// Detaching the root or an already-stale id is a no-op.
    pub fn detach(&mut self, id: NodeId) {
        if id == self.root || self.node(id).is_none() {
            return;
        }

        // Unlink from the parent's child list first
        if let Some(parent) = self.node(id).and_then(|n| n.parent) {
            if let Some(parent_node) = self.node_mut(parent) {
                parent_node.children.retain(|&c| c != id);
            }
        }

        // Iterative subtree teardown
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.slots[current.0 as usize].take() {
                stack.extend(node.children.iter().copied());
                self.free.push(current.0);
            }
        }
    }

    /// Iterate a node and all its descendants, depth-first.
    ///
    /// The traversal uses an explicit stack, so arbitrarily deep subtrees
    /// cannot overflow the call stack. Yields `id` itself first.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let stack = if self.node(id).is_some() {
            vec![id]
        } else {
            Vec::new()
        };
        Descendants { graph: self, stack }
    }

    /// Depth-first search for a node by name, starting at the root.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .find(|&id| self.node(id).and_then(|n| n.name.as_deref()) == Some(name))
    }

    /// World transform of a node, accumulated through its ancestors.
    pub fn world_transform(&self, id: NodeId) -> Matrix4<f32> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            match self.node(node_id) {
                Some(node) => {
                    chain.push(node.local_transform());
                    current = node.parent;
                }
                None => break,
            }
        }

        chain
            .into_iter()
            .rev()
            .fold(Matrix4::identity(), |acc, local| acc * local)
    }

    /// Produce a name not yet used by any live node.
    pub fn ensure_unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self.find_by_name(&test_name).is_some() {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a subtree, produced by [`SceneGraph::descendants`].
pub struct Descendants<'a> {
    graph: &'a SceneGraph,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.graph.node(id) {
            self.stack.extend(node.children.iter().copied());
        }
        Some(id)
    }
}
