use crate::autograd::{propagate, topological_sort};
use crate::value::Value;
use log::{debug, warn};

impl Value {
    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node's gradient with `1`, orders every reachable node so
    /// that each one comes after all of its consumers, and applies each
    /// node's local-gradient rule in that order. Gradients accumulate into
    /// whatever the nodes already hold: zero every leaf first (see
    /// [`Value::zero_grad`] or `ValueArray::zero_grad`) before running a
    /// fresh pass over a reused graph.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        debug!(
            "backward: {} nodes reachable from {:?}",
            sorted_nodes.len(),
            self.id()
        );

        let stale = sorted_nodes
            .iter()
            .filter(|node| node.is_leaf() && node.grad() != 0.0)
            .count();
        if stale > 0 {
            warn!(
                "backward: {} leaves already hold a non-zero gradient; new contributions will be added to it",
                stale
            );
        }

        self.set_grad(1.0);
        for node in sorted_nodes.iter().rev() {
            propagate(node);
        }
        debug!("backward: finished from {:?}", self.id());
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
