//! # Viewport
//!
//! Owns the scene graph and the active camera, and answers the frustum
//! containment questions the framing search is built on.

use cgmath::{Vector3, Vector4};
use log::debug;

use crate::camera::{Frustum, ViewCamera};
use crate::error::PreviewError;
use crate::scene::{NodeId, SceneGraph, SceneNode};

/// Scene plus point of view.
///
/// The viewport tracks at most one "current shape": the preview node that
/// replaces its predecessor whenever the user picks a new shape.
pub struct Viewport {
    graph: SceneGraph,
    camera: ViewCamera,
    current_shape: Option<NodeId>,
}

impl Viewport {
    /// Create an empty viewport with a camera at the canonical pose
    pub fn new(aspect: f32) -> Self {
        Self {
            graph: SceneGraph::new(),
            camera: ViewCamera::new(aspect),
            current_shape: None,
        }
    }

    /// The scene graph
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// Mutable access to the scene graph
    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    /// The active camera (the point-of-view node of the scene)
    pub fn camera(&self) -> &ViewCamera {
        &self.camera
    }

    /// Mutable access to the active camera
    pub fn camera_mut(&mut self) -> &mut ViewCamera {
        &mut self.camera
    }

    /// The node currently shown as the preview shape, if any
    pub fn current_shape(&self) -> Option<NodeId> {
        self.current_shape
    }

    /// Install `node` as the current shape under the scene root.
    ///
    /// The previous current shape, if any, is detached together with its
    /// whole subtree before the new one is attached.
    pub fn set_current_shape(&mut self, node: SceneNode) -> Result<NodeId, PreviewError> {
        if let Some(previous) = self.current_shape.take() {
            debug!("replacing current shape node {}", previous.index());
            self.graph.detach(previous);
        }

        let root = self.graph.root();
        let id = self.graph.attach(root, node)?;
        self.current_shape = Some(id);
        Ok(id)
    }

    /// Detach the current shape, leaving the viewport empty
    pub fn clear_current_shape(&mut self) {
        if let Some(previous) = self.current_shape.take() {
            self.graph.detach(previous);
        }
    }

    /// Test whether a single node is fully inside the camera frustum.
    ///
    /// Nodes with geometry test their world-space bounding box; nodes
    /// without geometry test their world position as a point. A stale id
    /// is never inside.
    pub fn is_inside_frustum(&self, id: NodeId) -> bool {
        let frustum = Frustum::from_matrix(&self.camera.view_projection_matrix());
        self.node_inside(&frustum, id)
    }

    /// Test whether a node and every one of its descendants are fully
    /// inside the camera frustum.
    ///
    /// Depth-first with an explicit stack, short-circuiting on the first
    /// node that falls outside.
    pub fn is_subtree_inside_frustum(&self, id: NodeId) -> bool {
        if self.graph.node(id).is_none() {
            return false;
        }

        let frustum = Frustum::from_matrix(&self.camera.view_projection_matrix());
        self.graph
            .descendants(id)
            .all(|node_id| self.node_inside(&frustum, node_id))
    }

    /// Camera depth published to the host's zoom slider
    pub fn zoom_value(&self) -> f32 {
        self.camera.depth()
    }

    fn node_inside(&self, frustum: &Frustum, id: NodeId) -> bool {
        let Some(node) = self.graph.node(id) else {
            return false;
        };

        let world = self.graph.world_transform(id);
        match &node.geometry {
            Some(geometry) => frustum.contains_aabb(&geometry.local_aabb().transform(&world)),
            None => {
                let p = world * Vector4::new(0.0, 0.0, 0.0, 1.0);
                frustum.contains_point(Vector3::new(p.x / p.w, p.y / p.w, p.z / p.w))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::generate_cube;
    use cgmath::Vector3;

    #[test]
    fn test_set_current_shape_replaces_previous() {
        let mut viewport = Viewport::new(1.0);

        let first = viewport
            .set_current_shape(SceneNode::new().with_name("First"))
            .unwrap();
        let second = viewport
            .set_current_shape(SceneNode::new().with_name("Second"))
            .unwrap();

        assert!(viewport.graph().node(first).is_none());
        assert_eq!(viewport.current_shape(), Some(second));
        assert_eq!(viewport.graph().len(), 2); // root + current shape
    }

    #[test]
    fn test_point_node_visibility() {
        let mut viewport = Viewport::new(1.0);
        let id = viewport.set_current_shape(SceneNode::new()).unwrap();
        assert!(viewport.is_inside_frustum(id));

        viewport
            .graph_mut()
            .node_mut(id)
            .unwrap()
            .position = Vector3::new(500.0, 0.0, 0.0);
        assert!(!viewport.is_inside_frustum(id));
    }

    #[test]
    fn test_subtree_visibility_short_circuits_on_leaf() {
        let mut viewport = Viewport::new(1.0);
        let parent = viewport
            .set_current_shape(SceneNode::new().with_geometry(generate_cube()))
            .unwrap();
        let leaf = viewport
            .graph_mut()
            .attach(
                parent,
                SceneNode::new().with_position(Vector3::new(500.0, 0.0, 0.0)),
            )
            .unwrap();

        assert!(viewport.is_inside_frustum(parent));
        assert!(!viewport.is_inside_frustum(leaf));
        assert!(!viewport.is_subtree_inside_frustum(parent));
    }

    #[test]
    fn test_stale_id_is_never_inside() {
        let mut viewport = Viewport::new(1.0);
        let id = viewport.set_current_shape(SceneNode::new()).unwrap();
        viewport.clear_current_shape();

        assert!(!viewport.is_inside_frustum(id));
        assert!(!viewport.is_subtree_inside_frustum(id));
    }
}
