//! Camera auto-framing: fit the current shape fully into view.
//!
//! The search scans candidate camera depths from near to far in fixed
//! increments and accepts the first depth at which the target node and
//! every descendant pass the frustum containment test. There is no
//! caching; the scan is a stateless pass over the scene graph, re-run on
//! each shape selection.

use log::{debug, warn};

use crate::scene::NodeId;
use crate::viewport::Viewport;

/// Near edge of the depth search range (inclusive)
pub const NEAR_BOUND: f32 = 1.0;
/// Far edge of the depth search range (exclusive)
pub const FAR_BOUND: f32 = 100.0;
/// Depth increment between candidates
pub const DEPTH_STEP: f32 = 0.1;

/// Outcome of an auto-framing pass.
///
/// `NotFramed` replaces the silent no-op of earlier designs: the caller can
/// tell "framed at d" apart from "gave up", and the camera is guaranteed
/// untouched in the latter case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutoFrameResult {
    /// The shape fits fully into view at this camera depth
    Framed(f32),
    /// No candidate depth in the search range contains the whole subtree
    NotFramed,
}

impl AutoFrameResult {
    /// The framed distance, if one was found
    pub fn distance(&self) -> Option<f32> {
        match *self {
            AutoFrameResult::Framed(d) => Some(d),
            AutoFrameResult::NotFramed => None,
        }
    }
}

/// Scan candidate depths in `[NEAR_BOUND, FAR_BOUND)` and return the first
/// one the predicate accepts.
///
/// Candidates are derived from integer step counts, so repeated float
/// addition cannot drift the grid.
pub fn scan_depths<F>(mut fits: F) -> Option<f32>
where
    F: FnMut(f32) -> bool,
{
    let steps = ((FAR_BOUND - NEAR_BOUND) / DEPTH_STEP).round() as u32;
    (0..steps)
        .map(|i| NEAR_BOUND + i as f32 * DEPTH_STEP)
        .find(|&depth| fits(depth))
}

/// Find the smallest camera depth at which `target` and all its
/// descendants sit fully inside the view frustum, and move the camera
/// there.
///
/// During the scan only the camera's depth changes; X/Y and orientation
/// stay as they were. On success the camera is reset to the canonical
/// pose and placed at the accepted depth, so a preceding manual
/// [`set_distance`] has no effect on the result. On failure the camera is
/// restored to its exact pre-call state.
pub fn auto_frame(viewport: &mut Viewport, target: NodeId) -> AutoFrameResult {
    if viewport.graph().node(target).is_none() {
        warn!("auto_frame: target node {} is not in the graph", target.index());
        return AutoFrameResult::NotFramed;
    }

    let saved = *viewport.camera();

    let found = scan_depths(|depth| {
        viewport.camera_mut().set_depth(depth);
        viewport.is_subtree_inside_frustum(target)
    });

    match found {
        Some(distance) => {
            let camera = viewport.camera_mut();
            camera.reset_to_canonical();
            camera.set_depth(distance);
            debug!(
                "auto_frame: node {} framed at depth {:.1}",
                target.index(),
                distance
            );
            AutoFrameResult::Framed(distance)
        }
        None => {
            *viewport.camera_mut() = saved;
            debug!(
                "auto_frame: node {} does not fit within [{}, {})",
                target.index(),
                NEAR_BOUND,
                FAR_BOUND
            );
            AutoFrameResult::NotFramed
        }
    }
}

/// Manual zoom: set only the camera depth, with no containment check and
/// no bounds validation. The host's slider enforces its own range.
pub fn set_distance(viewport: &mut Viewport, distance: f32) {
    viewport.camera_mut().set_depth(distance);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::generate_cube;
    use crate::scene::SceneNode;
    use cgmath::Vector3;

    fn cube_viewport() -> (Viewport, NodeId) {
        let mut viewport = Viewport::new(1.0);
        let id = viewport
            .set_current_shape(
                SceneNode::new()
                    .with_name("Shape")
                    .with_geometry(generate_cube()),
            )
            .unwrap();
        (viewport, id)
    }

    /// Verify first-fit minimality: the subtree fits at the accepted depth
    /// but not one step nearer.
    fn assert_minimal_fit(viewport: &mut Viewport, target: NodeId, distance: f32) {
        viewport.camera_mut().set_depth(distance);
        assert!(viewport.is_subtree_inside_frustum(target));

        if distance - DEPTH_STEP >= NEAR_BOUND {
            viewport.camera_mut().set_depth(distance - DEPTH_STEP);
            assert!(!viewport.is_subtree_inside_frustum(target));
        }
    }

    #[test]
    fn test_scan_accepts_smallest_candidate() {
        // Fit rule from the framing scenario: a node at depth 0.93 fits
        // once the candidate reaches 2 * 0.93 = 1.86
        let node_depth = 0.93_f32;
        let found = scan_depths(|candidate| 2.0 * node_depth <= candidate).unwrap();
        assert!((found - 1.9).abs() < 1e-4);
    }

    #[test]
    fn test_scan_exhaustion_returns_none() {
        assert_eq!(scan_depths(|_| false), None);
        // The far bound itself is excluded
        let mut tested = Vec::new();
        scan_depths(|d| {
            tested.push(d);
            false
        });
        assert_eq!(tested.len(), 990);
        assert!((tested[0] - NEAR_BOUND).abs() < 1e-6);
        assert!(*tested.last().unwrap() < FAR_BOUND);
    }

    #[test]
    fn test_unit_cube_framed_minimally() {
        let (mut viewport, id) = cube_viewport();
        let result = auto_frame(&mut viewport, id);

        let distance = result.distance().expect("unit cube must be frameable");
        // Analytically about 1.71 for fovy 45 deg, aspect 1; first grid hit 1.8
        assert!(distance >= NEAR_BOUND && distance < 3.0);
        assert_eq!(viewport.camera().depth(), distance);
        assert_minimal_fit(&mut viewport, id, distance);
    }

    #[test]
    fn test_point_node_frames_at_near_bound() {
        let mut viewport = Viewport::new(1.0);
        let id = viewport.set_current_shape(SceneNode::new()).unwrap();

        let result = auto_frame(&mut viewport, id);
        assert_eq!(result.distance(), Some(NEAR_BOUND));
        assert_eq!(viewport.camera().depth(), NEAR_BOUND);
    }

    #[test]
    fn test_unfittable_shape_leaves_camera_untouched() {
        let mut viewport = Viewport::new(1.0);
        // Corners reach z = +5000, behind the camera at every candidate depth
        let id = viewport
            .set_current_shape(SceneNode::new().with_geometry(generate_cube().scaled(10_000.0)))
            .unwrap();

        viewport.camera_mut().set_depth(42.0);
        let before = *viewport.camera();

        let result = auto_frame(&mut viewport, id);

        assert_eq!(result, AutoFrameResult::NotFramed);
        assert_eq!(*viewport.camera(), before);
    }

    #[test]
    fn test_auto_frame_overrides_manual_distance() {
        let (mut viewport, id) = cube_viewport();

        set_distance(&mut viewport, 50.0);
        assert_eq!(viewport.camera().depth(), 50.0);

        let result = auto_frame(&mut viewport, id);
        let distance = result.distance().unwrap();

        assert!(distance < 50.0);
        assert_eq!(viewport.camera().depth(), distance);
    }

    #[test]
    fn test_out_of_frustum_leaf_rejects_candidate() {
        let (mut viewport, parent) = cube_viewport();

        // Alone, the cube frames close in
        let near = auto_frame(&mut viewport, parent).distance().unwrap();

        // A distant point leaf forces the camera much further out
        viewport
            .graph_mut()
            .attach(
                parent,
                SceneNode::new()
                    .with_name("Leaf")
                    .with_position(Vector3::new(25.0, 0.0, 0.0)),
            )
            .unwrap();
        let far = auto_frame(&mut viewport, parent).distance().unwrap();

        assert!(far > near);
        assert_minimal_fit(&mut viewport, parent, far);
    }

    #[test]
    fn test_stale_target_is_not_framed() {
        let (mut viewport, id) = cube_viewport();
        viewport.clear_current_shape();

        let before = *viewport.camera();
        assert_eq!(auto_frame(&mut viewport, id), AutoFrameResult::NotFramed);
        assert_eq!(*viewport.camera(), before);
    }

    #[test]
    fn test_randomized_subtrees_frame_minimally() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            let mut viewport = Viewport::new(1.0);
            let parent = viewport
                .set_current_shape(SceneNode::new().with_geometry(generate_cube()))
                .unwrap();

            for _ in 0..rng.random_range(1..5) {
                let offset = Vector3::new(
                    rng.random_range(-8.0..8.0),
                    rng.random_range(-8.0..8.0),
                    rng.random_range(-2.0..2.0),
                );
                viewport
                    .graph_mut()
                    .attach(
                        parent,
                        SceneNode::new()
                            .with_geometry(generate_cube())
                            .with_position(offset),
                    )
                    .unwrap();
            }

            let distance = auto_frame(&mut viewport, parent)
                .distance()
                .expect("jittered subtree stays within frameable bounds");
            assert_minimal_fit(&mut viewport, parent, distance);
        }
    }
}
