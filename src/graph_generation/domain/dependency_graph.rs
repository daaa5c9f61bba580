use super::{DependencyEdge, DependencyKind, NodeName};
use std::collections::HashMap;

/// Dependencies declared for one node, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeDependencies {
    pub requires: Vec<NodeName>,
    pub build_requires: Vec<NodeName>,
}

/// DependencyGraph aggregate built from the parsed edge list
///
/// Nodes keep their first-declaration order, which is also the order
/// top-level traversal walks them in.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<NodeName>,
    dependencies: HashMap<NodeName, NodeDependencies>,
    edge_count: usize,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from edges; both endpoints of each edge become nodes.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = DependencyEdge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Registers a node with empty dependency lists if it is not known yet.
    pub fn add_node(&mut self, node: NodeName) {
        if !self.dependencies.contains_key(&node) {
            self.dependencies
                .insert(node.clone(), NodeDependencies::default());
            self.nodes.push(node);
        }
    }

    pub fn add_edge(&mut self, edge: DependencyEdge) {
        self.add_node(edge.dependent.clone());
        self.add_node(edge.dependency.clone());

        if let Some(entry) = self.dependencies.get_mut(&edge.dependent) {
            match edge.kind {
                DependencyKind::Require => entry.requires.push(edge.dependency),
                DependencyKind::BuildRequire => entry.build_requires.push(edge.dependency),
            }
            self.edge_count += 1;
        }
    }

    pub fn nodes(&self) -> &[NodeName] {
        &self.nodes
    }

    pub fn contains(&self, node: &NodeName) -> bool {
        self.dependencies.contains_key(node)
    }

    pub fn requires(&self, node: &NodeName) -> &[NodeName] {
        self.dependencies
            .get(node)
            .map(|d| d.requires.as_slice())
            .unwrap_or_default()
    }

    pub fn build_requires(&self, node: &NodeName) -> &[NodeName] {
        self.dependencies
            .get(node)
            .map(|d| d.build_requires.as_slice())
            .unwrap_or_default()
    }

    /// Requires followed by build-requires, each in declaration order
    pub fn dependencies_of<'a>(&'a self, node: &NodeName) -> impl Iterator<Item = &'a NodeName> {
        self.requires(node)
            .iter()
            .chain(self.build_requires(node).iter())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> NodeName {
        NodeName::new(s).unwrap()
    }

    fn edge(from: &str, to: &str, kind: DependencyKind) -> DependencyEdge {
        DependencyEdge::new(name(from), name(to), kind)
    }

    #[test]
    fn test_dependency_graph_from_edges() {
        let graph = DependencyGraph::from_edges(vec![
            edge("a", "b", DependencyKind::Require),
            edge("a", "c", DependencyKind::BuildRequire),
        ]);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.requires(&name("a")), &[name("b")]);
        assert_eq!(graph.build_requires(&name("a")), &[name("c")]);
    }

    #[test]
    fn test_dependency_endpoints_are_registered() {
        let graph = DependencyGraph::from_edges(vec![edge("a", "b", DependencyKind::Require)]);

        assert!(graph.contains(&name("b")));
        assert!(graph.requires(&name("b")).is_empty());
        assert!(graph.build_requires(&name("b")).is_empty());
    }

    #[test]
    fn test_nodes_keep_first_declaration_order() {
        let graph = DependencyGraph::from_edges(vec![
            edge("zeta", "alpha", DependencyKind::Require),
            edge("mid", "zeta", DependencyKind::Require),
            edge("alpha", "omega", DependencyKind::BuildRequire),
        ]);

        let order: Vec<&str> = graph.nodes().iter().map(NodeName::as_str).collect();
        assert_eq!(order, vec!["zeta", "alpha", "mid", "omega"]);
    }

    #[test]
    fn test_both_kinds_between_same_pair() {
        let graph = DependencyGraph::from_edges(vec![
            edge("a", "b", DependencyKind::Require),
            edge("a", "b", DependencyKind::BuildRequire),
        ]);

        let deps: Vec<&NodeName> = graph.dependencies_of(&name("a")).collect();
        assert_eq!(deps, vec![&name("b"), &name("b")]);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_dependencies_of_lists_requires_first() {
        let graph = DependencyGraph::from_edges(vec![
            edge("a", "b", DependencyKind::BuildRequire),
            edge("a", "c", DependencyKind::Require),
        ]);

        let deps: Vec<&str> = graph
            .dependencies_of(&name("a"))
            .map(NodeName::as_str)
            .collect();
        assert_eq!(deps, vec!["c", "b"]);
    }

    #[test]
    fn test_unknown_node_has_no_dependencies() {
        let graph = DependencyGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.dependencies_of(&name("ghost")).count(), 0);
    }
}
