//! Consumers of growth steps.
//!
//! The engine hands every new edge to a [`GrowthVisitor`] as soon as it is
//! created. A renderer adds its line and sphere there; tests record the edges.

use crate::Edge;

/// Receiver for edges produced by [`RrtEngine::grow`](crate::RrtEngine::grow).
pub trait GrowthVisitor {
    /// Called once for every growth step, in growth order.
    fn visit(&mut self, edge: &Edge);
}

/// Records every edge it is handed.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<Edge>,
}

impl CollectingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edges in the order they were grown.
    pub fn edges(&self) -> &[Edge] {
        &self.collected
    }
}

impl GrowthVisitor for CollectingVisitor {
    fn visit(&mut self, edge: &Edge) {
        self.collected.push(*edge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RrtConfig, RrtEngine};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn records_edges_in_growth_order() {
        let mut engine =
            RrtEngine::new(RrtConfig::default(), StdRng::seed_from_u64(17)).unwrap();
        let mut visitor = CollectingVisitor::new();
        assert!(visitor.edges().is_empty());

        engine.grow(10, &mut visitor);

        assert_eq!(visitor.edges().len(), 10);
        for (i, edge) in visitor.edges().iter().enumerate() {
            assert_eq!(edge.child, i + 1);
        }
    }
}
