use crate::graph_generation::domain::{BuildOrder, DependencyGraph, NodeName};
use crate::shared::error::ForgeError;
use crate::shared::Result;
use std::collections::HashSet;
use tracing::{debug, trace};

/// One node on the traversal path together with the dependencies still to visit
struct Frame {
    node: NodeName,
    pending: Vec<NodeName>,
    next: usize,
}

/// TopologicalProcessor service that builds nodes dependencies-first
///
/// Traversal is a depth-first walk kept on an explicit stack. A node is built
/// only after everything in its requires list and then its build-requires
/// list, and is built at most once per [`BuildOrder`]. A node reached again
/// while it is still on the current path is a cycle and fails the run before
/// anything on that path is built.
pub struct TopologicalProcessor;

impl TopologicalProcessor {
    /// Processes every node of the graph in first-declaration order
    pub fn process_all<F>(graph: &DependencyGraph, order: &mut BuildOrder, build: &mut F) -> Result<()>
    where
        F: FnMut(&NodeName) -> Result<()>,
    {
        for node in graph.nodes() {
            Self::process(node, graph, order, build)?;
        }
        Ok(())
    }

    /// Builds `node` after all of its not-yet-built dependencies
    ///
    /// Nodes already in `order` are skipped. `build` is called once per newly
    /// built node; its first error stops the traversal and is returned as is.
    ///
    /// # Errors
    /// Returns [`ForgeError::CycleDetected`] if the dependencies of `node`
    /// lead back to a node that is still being processed.
    pub fn process<F>(
        node: &NodeName,
        graph: &DependencyGraph,
        order: &mut BuildOrder,
        build: &mut F,
    ) -> Result<()>
    where
        F: FnMut(&NodeName) -> Result<()>,
    {
        if order.contains(node) {
            return Ok(());
        }

        let mut in_progress: HashSet<NodeName> = HashSet::new();
        let mut stack = vec![Self::enter(node, graph, order, &mut in_progress)];

        while let Some(frame) = stack.last_mut() {
            if let Some(dependency) = frame.pending.get(frame.next).cloned() {
                frame.next += 1;

                if order.contains(&dependency) {
                    continue;
                }
                if in_progress.contains(&dependency) {
                    return Err(Self::cycle_error(&stack, &dependency));
                }

                let child = Self::enter(&dependency, graph, order, &mut in_progress);
                stack.push(child);
                continue;
            }

            if let Some(finished) = stack.pop() {
                debug!(node = %finished.node, "Building node");
                build(&finished.node)?;
                in_progress.remove(&finished.node);
                order.record(finished.node);
            }
        }

        Ok(())
    }

    fn enter(
        node: &NodeName,
        graph: &DependencyGraph,
        order: &BuildOrder,
        in_progress: &mut HashSet<NodeName>,
    ) -> Frame {
        let pending: Vec<NodeName> = graph
            .dependencies_of(node)
            .filter(|dependency| !order.contains(dependency))
            .cloned()
            .collect();
        trace!(node = %node, pending = pending.len(), "Entering node");

        in_progress.insert(node.clone());
        Frame {
            node: node.clone(),
            pending,
            next: 0,
        }
    }

    fn cycle_error(stack: &[Frame], repeated: &NodeName) -> anyhow::Error {
        let start = stack
            .iter()
            .position(|frame| &frame.node == repeated)
            .unwrap_or(0);
        let mut cycle: Vec<&str> = stack[start..].iter().map(|f| f.node.as_str()).collect();
        cycle.push(repeated.as_str());

        ForgeError::CycleDetected {
            cycle: cycle.join(" → "),
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_generation::services::EdgeListParser;

    fn name(s: &str) -> NodeName {
        NodeName::new(s).unwrap()
    }

    fn run(content: &str) -> Result<Vec<String>> {
        let graph = EdgeListParser::parse(content)?;
        let mut order = BuildOrder::new();
        let mut built = Vec::new();
        TopologicalProcessor::process_all(&graph, &mut order, &mut |node: &NodeName| {
            built.push(node.to_string());
            Ok(())
        })?;
        assert_eq!(
            built,
            order.as_slice().iter().map(|n| n.to_string()).collect::<Vec<_>>()
        );
        Ok(built)
    }

    #[test]
    fn test_single_edge() {
        assert_eq!(run("a -> b").unwrap(), vec!["b", "a"]);
    }

    #[test]
    fn test_requires_before_build_requires() {
        assert_eq!(run("a ~> b\na -> c").unwrap(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_declared_order_within_list() {
        assert_eq!(run("app -> z\napp -> y\napp -> x").unwrap(), vec!["z", "y", "x", "app"]);
    }

    #[test]
    fn test_diamond_builds_shared_node_once() {
        let built = run("app -> left\napp -> right\nleft -> base\nright -> base").unwrap();

        assert_eq!(built, vec!["base", "left", "right", "app"]);
    }

    #[test]
    fn test_every_edge_points_backwards_in_order() {
        let content = "a -> b\na ~> c\nb -> d\nc -> d\nc ~> e\ne -> d\nf -> a\ng";
        let graph = EdgeListParser::parse(content).unwrap();
        let mut order = BuildOrder::new();
        TopologicalProcessor::process_all(&graph, &mut order, &mut |_: &NodeName| Ok(())).unwrap();

        assert_eq!(order.len(), graph.node_count());
        for node in graph.nodes() {
            let node_pos = order.position(node).unwrap();
            for dependency in graph.dependencies_of(node) {
                assert!(
                    order.position(dependency).unwrap() < node_pos,
                    "{} built after its dependent {}",
                    dependency,
                    node
                );
            }
        }
    }

    #[test]
    fn test_order_is_deterministic() {
        let content = "top1 -> shared\ntop2 -> shared\ntop3 ~> tool\nshared ~> tool";
        let first = run(content).unwrap();
        for _ in 0..10 {
            assert_eq!(run(content).unwrap(), first);
        }
        assert_eq!(first, vec!["tool", "shared", "top1", "top2", "top3"]);
    }

    #[test]
    fn test_two_node_cycle_is_detected() {
        let err = run("a -> b\nb -> a").unwrap_err();

        match err.downcast_ref::<ForgeError>() {
            Some(ForgeError::CycleDetected { cycle }) => assert_eq!(cycle, "a → b → a"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_cycle_builds_nothing() {
        let graph = EdgeListParser::parse("a -> b\nb ~> c\nc -> a").unwrap();
        let mut order = BuildOrder::new();
        let mut calls = 0;
        let result = TopologicalProcessor::process_all(&graph, &mut order, &mut |_: &NodeName| {
            calls += 1;
            Ok(())
        });

        assert!(result.is_err());
        assert_eq!(calls, 0);
        assert!(order.is_empty());
    }

    #[test]
    fn test_self_edge_is_a_cycle() {
        let err = run("a -> a").unwrap_err();
        assert!(err.to_string().contains("a → a"));
    }

    #[test]
    fn test_cycle_path_excludes_nodes_before_it() {
        let err = run("root -> a\na -> b\nb -> a").unwrap_err();
        match err.downcast_ref::<ForgeError>() {
            Some(ForgeError::CycleDetected { cycle }) => assert_eq!(cycle, "a → b → a"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_build_error_stops_traversal() {
        let graph = EdgeListParser::parse("a -> b\na -> c").unwrap();
        let mut order = BuildOrder::new();
        let mut attempted = Vec::new();
        let result = TopologicalProcessor::process_all(&graph, &mut order, &mut |node: &NodeName| {
            attempted.push(node.to_string());
            if node.as_str() == "c" {
                anyhow::bail!("builder failed for c");
            }
            Ok(())
        });

        assert!(result.unwrap_err().to_string().contains("builder failed for c"));
        assert_eq!(attempted, vec!["b", "c"]);
        assert_eq!(order.as_slice(), &[name("b")]);
    }

    #[test]
    fn test_process_skips_already_built_node() {
        let graph = EdgeListParser::parse("a -> b").unwrap();
        let mut order = BuildOrder::new();
        order.record(name("b"));

        let mut built = Vec::new();
        TopologicalProcessor::process(&name("a"), &graph, &mut order, &mut |node: &NodeName| {
            built.push(node.to_string());
            Ok(())
        })
        .unwrap();

        assert_eq!(built, vec!["a"]);
        TopologicalProcessor::process(&name("a"), &graph, &mut order, &mut |_: &NodeName| -> Result<()> {
            panic!("a must not be built twice")
        })
        .unwrap();
    }

    #[test]
    fn test_process_single_start_node_only_builds_its_closure() {
        let graph = EdgeListParser::parse("a -> b\nc -> d").unwrap();
        let mut order = BuildOrder::new();
        TopologicalProcessor::process(&name("a"), &graph, &mut order, &mut |_: &NodeName| Ok(()))
            .unwrap();

        assert_eq!(order.as_slice(), &[name("b"), name("a")]);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let content: String = (0..5_000)
            .map(|i| format!("n{} -> n{}\n", i, i + 1))
            .collect();
        let built = run(&content).unwrap();

        assert_eq!(built.len(), 5_001);
        assert_eq!(built.first().map(String::as_str), Some("n5000"));
        assert_eq!(built.last().map(String::as_str), Some("n0"));
    }
}
