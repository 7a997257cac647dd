//! Rendering and camera utilities for the RRT viewer.

use macroquad::prelude::*;
use nalgebra::Point3;
use rrt_tree::{Edge, GrowthVisitor, RrtTree};

pub mod camera;
pub use camera::FollowCamera;

/// Radius of the sphere drawn at each node.
pub const NODE_RADIUS: f32 = 0.5;

/// Color of the sphere drawn at each node.
pub const NODE_COLOR: Color = Color::new(0.35, 0.35, 0.4, 1.0);

/// Color of the line drawn for each edge.
pub const EDGE_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.5);

/// Converts a nalgebra point to macroquad's vector type.
#[inline]
pub fn to_vec3(p: Point3<f32>) -> Vec3 {
    vec3(p.x, p.y, p.z)
}

/// Everything drawn so far: the root plus one line and one sphere per edge.
///
/// macroquad redraws from scratch every frame, so the scene keeps the
/// segments it was handed and replays them in [`draw`](TreeScene::draw).
#[derive(Debug, Clone)]
pub struct TreeScene {
    root: Vec3,
    segments: Vec<(Vec3, Vec3)>,
}

impl TreeScene {
    /// Creates a scene holding only the root node of `tree`.
    pub fn new(tree: &RrtTree) -> Self {
        Self {
            root: to_vec3(tree.root()),
            segments: Vec::new(),
        }
    }

    /// Creates a scene holding every node and edge already in `tree`.
    pub fn from_tree(tree: &RrtTree) -> Self {
        let mut scene = Self::new(tree);
        scene.segments = tree
            .edges()
            .map(|(parent, child)| (to_vec3(parent), to_vec3(child)))
            .collect();
        scene
    }

    /// Number of nodes in the scene, root included.
    pub fn node_count(&self) -> usize {
        self.segments.len() + 1
    }

    /// Returns the `(nearest, new node)` segments in growth order.
    pub fn segments(&self) -> &[(Vec3, Vec3)] {
        &self.segments
    }

    /// Draws all edges and nodes with the current camera.
    pub fn draw(&self) {
        draw_sphere(self.root, NODE_RADIUS, None, NODE_COLOR);
        for &(nearest, new_node) in &self.segments {
            draw_line_3d(new_node, nearest, EDGE_COLOR);
            draw_sphere(new_node, NODE_RADIUS, None, NODE_COLOR);
        }
    }
}

impl GrowthVisitor for TreeScene {
    fn visit(&mut self, edge: &Edge) {
        self.segments
            .push((to_vec3(edge.nearest), to_vec3(edge.new_node)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::SeedableRng;
    use ::rand::rngs::StdRng;
    use rrt_tree::{RrtConfig, RrtEngine};

    #[test]
    fn scene_follows_growth() {
        let mut engine =
            RrtEngine::new(RrtConfig::default(), StdRng::seed_from_u64(4)).unwrap();
        let mut scene = TreeScene::new(engine.tree());
        assert_eq!(scene.node_count(), 1);

        engine.grow(25, &mut scene);
        assert_eq!(scene.node_count(), engine.tree().len());

        let rebuilt = TreeScene::from_tree(engine.tree());
        assert_eq!(rebuilt.segments(), scene.segments());
    }

    #[test]
    fn segment_endpoints_match_edge() {
        let mut engine =
            RrtEngine::new(RrtConfig::default(), StdRng::seed_from_u64(4)).unwrap();
        let mut scene = TreeScene::new(engine.tree());
        let edge = engine.step_toward(Point3::new(100.0, 0.0, 0.0));
        scene.visit(&edge);

        assert_eq!(
            scene.segments()[0],
            (vec3(0.0, 0.0, 0.0), vec3(3.0, 0.0, 0.0))
        );
    }
}
