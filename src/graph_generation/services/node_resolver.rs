use crate::graph_generation::domain::{NodeName, ResolvedRef, Scope, DEFAULT_VERSION};

/// NodeResolver service turning short node names into full references
///
/// Splitting replaces `@` with `/` and counts the segments:
/// - one segment gets version `1.0` and the default scope
/// - two segments keep the version and get the default scope
/// - three or more are taken as already qualified and returned unchanged
///
/// Over-qualified input is not validated.
#[derive(Debug, Clone, Default)]
pub struct NodeResolver {
    scope: Scope,
}

impl NodeResolver {
    pub fn new(scope: Scope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn resolve(&self, name: &str) -> ResolvedRef {
        let segments = name.split(['/', '@']).count();
        let reference = match segments {
            1 => format!(
                "{}/{}@{}/{}",
                name,
                DEFAULT_VERSION,
                self.scope.user(),
                self.scope.channel()
            ),
            2 => format!("{}@{}/{}", name, self.scope.user(), self.scope.channel()),
            _ => name.to_string(),
        };
        ResolvedRef::from_canonical(reference)
    }

    pub fn resolve_node(&self, node: &NodeName) -> ResolvedRef {
        self.resolve(node.as_str())
    }

    pub fn resolve_all(&self, nodes: &[NodeName]) -> Vec<ResolvedRef> {
        nodes.iter().map(|node| self.resolve_node(node)).collect()
    }
}
