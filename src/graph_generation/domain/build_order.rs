use super::NodeName;
use std::collections::HashSet;

/// Nodes already built in this run, in the order they were built
///
/// Append-only: a node is recorded once and never removed.
#[derive(Debug, Clone, Default)]
pub struct BuildOrder {
    order: Vec<NodeName>,
    seen: HashSet<NodeName>,
}

impl BuildOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, node: &NodeName) -> bool {
        self.seen.contains(node)
    }

    /// Records `node` as built. Returns false if it was already recorded.
    pub fn record(&mut self, node: NodeName) -> bool {
        if !self.seen.insert(node.clone()) {
            return false;
        }
        self.order.push(node);
        true
    }

    pub fn position(&self, node: &NodeName) -> Option<usize> {
        self.order.iter().position(|n| n == node)
    }

    pub fn as_slice(&self) -> &[NodeName] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_vec(self) -> Vec<NodeName> {
        self.order
    }
}
