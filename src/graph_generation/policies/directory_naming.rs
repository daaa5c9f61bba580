use crate::graph_generation::domain::ResolvedRef;

/// DirectoryNaming policy for node working directories
///
/// A node's directory is named after its resolved reference with every `@`
/// and `/` replaced by `_`, so `zlib/1.2@alice/stable` builds in
/// `zlib_1.2_alice_stable`. Two node names that resolve to the same reference
/// therefore share a directory, which the workspace reports as a collision.
pub struct DirectoryNaming;

impl DirectoryNaming {
    pub fn directory_name(reference: &ResolvedRef) -> String {
        reference.as_str().replace(['@', '/'], "_")
    }
}
