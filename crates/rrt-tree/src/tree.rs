//! Node storage and nearest-neighbor lookup.

use nalgebra::Point3;

/// Index of a node in insertion order. The root is always `0`.
pub type NodeId = usize;

/// The growing set of tree nodes.
///
/// Nodes are kept in the order they were added and are never removed. Every
/// node except the root remembers the node it was attached to, so the edges
/// can be replayed at any time.
#[derive(Debug, Clone)]
pub struct RrtTree {
    nodes: Vec<Point3<f32>>,
    // parents[i] is the parent of node i + 1.
    parents: Vec<NodeId>,
}

impl Default for RrtTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RrtTree {
    /// Creates a tree holding only the root at the origin.
    pub fn new() -> Self {
        Self {
            nodes: vec![Point3::origin()],
            parents: Vec::new(),
        }
    }

    /// Returns the number of nodes, root included. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; the root is present from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> Point3<f32> {
        self.nodes[0]
    }

    /// Returns all nodes in insertion order.
    #[inline]
    pub fn nodes(&self) -> &[Point3<f32>] {
        &self.nodes
    }

    /// Returns the node with the given id, if it exists.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<Point3<f32>> {
        self.nodes.get(id).copied()
    }

    /// Returns the parent of `id`, or `None` for the root and unknown ids.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        id.checked_sub(1).and_then(|i| self.parents.get(i).copied())
    }

    /// Iterates over every edge as `(parent, child)` in growth order.
    pub fn edges(&self) -> impl Iterator<Item = (Point3<f32>, Point3<f32>)> + '_ {
        self.parents
            .iter()
            .zip(&self.nodes[1..])
            .map(|(&parent, &child)| (self.nodes[parent], child))
    }

    /// Finds the node closest to `target`.
    ///
    /// Returns the node id and its *squared* distance. This is a linear scan
    /// and ties go to the node that was added first.
    pub fn nearest(&self, target: Point3<f32>) -> (NodeId, f32) {
        let mut best = 0;
        let mut best_d2 = (self.nodes[0] - target).norm_squared();
        for (id, node) in self.nodes.iter().enumerate().skip(1) {
            let d2 = (node - target).norm_squared();
            if d2 < best_d2 {
                best_d2 = d2;
                best = id;
            }
        }
        (best, best_d2)
    }

    /// Appends `point` attached to `parent` and returns its id.
    pub(crate) fn push(&mut self, parent: NodeId, point: Point3<f32>) -> NodeId {
        debug_assert!(parent < self.nodes.len(), "parent must already exist");
        let id = self.nodes.len();
        self.nodes.push(point);
        self.parents.push(parent);
        id
    }
}
