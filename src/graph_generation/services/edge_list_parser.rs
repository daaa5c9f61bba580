use crate::graph_generation::domain::{DependencyEdge, DependencyGraph, DependencyKind, NodeName};
use crate::shared::error::ForgeError;
use crate::shared::Result;
use std::collections::HashSet;
use tracing::debug;

/// Markers in the order they are tried; the first one found classifies the line
const MARKERS: [DependencyKind; 2] = [DependencyKind::BuildRequire, DependencyKind::Require];

const COMMENT_PREFIX: char = '#';

/// Edges and nodes read from one edge-list document
#[derive(Debug, Clone, Default)]
pub struct ParsedEdgeList {
    pub edges: Vec<DependencyEdge>,
    /// Every operand seen, in first-appearance order
    pub nodes: Vec<NodeName>,
}

impl ParsedEdgeList {
    pub fn into_graph(self) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for node in self.nodes {
            graph.add_node(node);
        }
        for edge in self.edges {
            graph.add_edge(edge);
        }
        graph
    }
}

/// EdgeListParser service for the `a -> b` / `a ~> b` DSL
///
/// The parser is permissive: non-blank lines without a relation marker are
/// skipped rather than rejected. A line that has a marker must split on it into
/// exactly two non-empty operands; any other marker left in an operand is part
/// of that operand's name.
pub struct EdgeListParser;

impl EdgeListParser {
    /// Parses an edge-list document into a dependency graph
    pub fn parse(content: &str) -> Result<DependencyGraph> {
        Ok(Self::parse_edges(content)?.into_graph())
    }

    /// Parses an edge-list document into its edges and node set
    ///
    /// # Errors
    /// Returns [`ForgeError::Parse`] for the first malformed declaration.
    pub fn parse_edges(content: &str) -> Result<ParsedEdgeList> {
        let mut parsed = ParsedEdgeList::default();
        let mut seen: HashSet<NodeName> = HashSet::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let Some(kind) = MARKERS.into_iter().find(|k| line.contains(k.marker())) else {
                debug!(line_number = index + 1, line, "Ignoring line without relation marker");
                continue;
            };

            let edge = Self::parse_declaration(line, kind).map_err(|reason| ForgeError::Parse {
                line_number: index + 1,
                line: raw_line.to_string(),
                reason,
            })?;

            for node in [&edge.dependent, &edge.dependency] {
                if seen.insert(node.clone()) {
                    parsed.nodes.push(node.clone());
                }
            }
            parsed.edges.push(edge);
        }

        Ok(parsed)
    }

    fn parse_declaration(
        line: &str,
        kind: DependencyKind,
    ) -> std::result::Result<DependencyEdge, String> {
        let operands: Vec<&str> = line.split(kind.marker()).map(str::trim).collect();

        let [dependent, dependency] = operands.as_slice() else {
            return Err(format!(
                "expected exactly two operands around '{}', found {}",
                kind.marker(),
                operands.len()
            ));
        };

        for (label, operand) in [("dependent", dependent), ("dependency", dependency)] {
            if operand.is_empty() {
                return Err(format!("missing {} operand", label));
            }
        }

        let dependent = NodeName::new(*dependent).map_err(|e| e.to_string())?;
        let dependency = NodeName::new(*dependency).map_err(|e| e.to_string())?;
        Ok(DependencyEdge::new(dependent, dependency, kind))
    }
}
