use crate::graph_generation::domain::ResolvedRef;

/// Default file name the external builder looks for in a node directory
pub const DEFAULT_MANIFEST_FILENAME: &str = "conanfile.py";

/// ManifestRenderer service producing the minimal recipe for one node
///
/// The recipe only declares the package name and version plus, when present,
/// the full references of its requires and build-requires.
pub struct ManifestRenderer;

impl ManifestRenderer {
    pub fn render(
        reference: &ResolvedRef,
        requires: &[ResolvedRef],
        build_requires: &[ResolvedRef],
    ) -> String {
        let mut manifest = format!(
            r#"
from conans import ConanFile

class ConanLib(ConanFile):
    name = "{}"
    version = "{}"
"#,
            reference.name(),
            reference.version()
        );

        if !requires.is_empty() {
            manifest.push_str(&format!("\n    requires = {}\n", Self::quoted_list(requires)));
        }
        if !build_requires.is_empty() {
            manifest.push_str(&format!(
                "\n    build_requires = {}\n",
                Self::quoted_list(build_requires)
            ));
        }

        manifest
    }

    fn quoted_list(references: &[ResolvedRef]) -> String {
        references
            .iter()
            .map(|reference| format!("\"{}\"", reference))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
