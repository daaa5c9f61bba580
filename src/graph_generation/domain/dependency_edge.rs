use super::NodeName;

/// Relation declared between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    /// Runtime dependency (`a -> b`)
    Require,
    /// Build-time-only dependency (`a ~> b`)
    BuildRequire,
}

impl DependencyKind {
    /// Marker used for this relation in the edge-list DSL
    pub fn marker(self) -> &'static str {
        match self {
            DependencyKind::Require => "->",
            DependencyKind::BuildRequire => "~>",
        }
    }
}

impl std::fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DependencyKind::Require => write!(f, "requires"),
            DependencyKind::BuildRequire => write!(f, "build-requires"),
        }
    }
}

/// `dependent` depends on `dependency` with the given kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    pub dependent: NodeName,
    pub dependency: NodeName,
    pub kind: DependencyKind,
}

impl DependencyEdge {
    pub fn new(dependent: NodeName, dependency: NodeName, kind: DependencyKind) -> Self {
        Self {
            dependent,
            dependency,
            kind,
        }
    }
}

impl std::fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.dependent,
            self.kind.marker(),
            self.dependency
        )
    }
}
