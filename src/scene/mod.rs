//! # Scene Graph
//!
//! Arena-backed scene graph for the preview. Nodes live in a flat slot
//! array and reference their children by index, which keeps traversal
//! iterative and sidesteps ownership cycles.

pub mod graph;

pub use graph::{NodeId, SceneGraph, SceneNode};
