//! The RRT growth engine.

use nalgebra::Point3;

use crate::{ConfigError, GrowthVisitor, NodeId, RrtConfig, RrtTree, UniformSource, sphere_point};

/// How the new node of a step was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// The sampled target was close enough and became the new node as-is.
    Reached,
    /// The tree advanced from the nearest node toward the target by the threshold.
    Advanced,
}

/// The edge produced by one growth step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Id of the existing node the new node was attached to.
    pub parent: NodeId,
    /// Position of that existing node.
    pub nearest: Point3<f32>,
    /// Id of the new node.
    pub child: NodeId,
    /// Position of the new node.
    pub new_node: Point3<f32>,
    /// Which branch of the step placed the new node.
    pub kind: StepKind,
}

impl Edge {
    /// Euclidean length of the edge.
    pub fn length(&self) -> f32 {
        (self.new_node - self.nearest).norm()
    }
}

/// Grows an [`RrtTree`] outward from the origin toward random points on a sphere.
///
/// Each [`step`](RrtEngine::step) samples a target on the sphere of radius
/// `R`, finds the nearest node and attaches exactly one new node to it.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rrt_tree::{RrtConfig, RrtEngine};
///
/// let mut engine = RrtEngine::new(RrtConfig::default(), StdRng::seed_from_u64(1))?;
/// let edge = engine.step();
/// assert_eq!(edge.parent, 0);
/// assert_eq!(engine.tree().len(), 2);
/// # Ok::<(), rrt_tree::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RrtEngine<S> {
    tree: RrtTree,
    config: RrtConfig,
    source: S,
}

impl<S: UniformSource> RrtEngine<S> {
    /// Creates an engine with a root-only tree.
    ///
    /// Fails if `config` does not pass [`RrtConfig::validate`].
    pub fn new(config: RrtConfig, source: S) -> Result<Self, ConfigError> {
        Ok(Self {
            tree: RrtTree::new(),
            config: config.validate()?,
            source,
        })
    }

    /// Returns the tree grown so far.
    #[inline]
    pub fn tree(&self) -> &RrtTree {
        &self.tree
    }

    /// Returns the growth parameters.
    #[inline]
    pub fn config(&self) -> &RrtConfig {
        &self.config
    }

    /// Draws a target uniformly from the surface of the sampling sphere.
    pub fn sample_random_point(&mut self) -> Point3<f32> {
        let u = self.source.next_unit();
        let v = self.source.next_unit();
        sphere_point(self.config.radius, u, v)
    }

    /// Performs one growth step toward a freshly sampled target.
    pub fn step(&mut self) -> Edge {
        let target = self.sample_random_point();
        self.step_toward(target)
    }

    /// Performs one growth step toward `target`.
    ///
    /// The "close enough" test compares the *squared* distance to the nearest
    /// node against the threshold, while the extension advances by the
    /// threshold as a linear distance.
    pub fn step_toward(&mut self, target: Point3<f32>) -> Edge {
        let threshold = self.config.threshold;
        let (parent, d2) = self.tree.nearest(target);
        let nearest = self.tree.nodes()[parent];

        let (new_node, kind) = if d2 <= threshold {
            (target, StepKind::Reached)
        } else {
            // d2 > threshold > 0, so the direction is never zero.
            let direction = (target - nearest).normalize();
            (nearest + direction * threshold, StepKind::Advanced)
        };

        let child = self.tree.push(parent, new_node);
        Edge {
            parent,
            nearest,
            child,
            new_node,
            kind,
        }
    }

    /// Performs `steps` growth steps, reporting each edge to `visitor`.
    pub fn grow<V: GrowthVisitor>(&mut self, steps: usize, visitor: &mut V) {
        for _ in 0..steps {
            let edge = self.step();
            visitor.visit(&edge);
        }
    }
}
