use crate::shared::error::ForgeError;
use crate::shared::Result;

/// Version given to bare node names
pub const DEFAULT_VERSION: &str = "1.0";

/// NewType wrapper for a node name as written in the edge list
///
/// Equality is textual: `zlib` and `zlib/1.0@user/channel` are different
/// names even though they resolve to the same reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeName(String);

impl NodeName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ForgeError::Validation {
                message: "Node name cannot be empty".to_string(),
            }
            .into());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default `user/channel` pair appended to partially qualified names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    user: String,
    channel: String,
}

impl Scope {
    pub fn new(user: impl Into<String>, channel: impl Into<String>) -> Result<Self> {
        let user = user.into();
        let channel = channel.into();
        for (label, value) in [("user", &user), ("channel", &channel)] {
            if value.is_empty() || value.contains(['/', '@']) {
                return Err(ForgeError::Validation {
                    message: format!(
                        "Invalid default {} '{}': must be non-empty and contain no '/' or '@'",
                        label, value
                    ),
                }
                .into());
            }
        }
        Ok(Self { user, channel })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self {
            user: "user".to_string(),
            channel: "channel".to_string(),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.user, self.channel)
    }
}

/// Fully qualified `name/version@user/channel` reference
///
/// Only the canonical string is stored; the parts are read back from it.
/// Over-qualified input is passed through as-is, so `user()` and `channel()`
/// may be missing for references that were never well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedRef {
    reference: String,
}

impl ResolvedRef {
    pub(crate) fn from_canonical(reference: String) -> Self {
        Self { reference }
    }

    pub fn as_str(&self) -> &str {
        &self.reference
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.reference.split(['/', '@'])
    }

    pub fn name(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }

    pub fn version(&self) -> &str {
        self.segments().nth(1).unwrap_or_default()
    }

    pub fn user(&self) -> Option<&str> {
        self.segments().nth(2)
    }

    pub fn channel(&self) -> Option<&str> {
        self.segments().nth(3)
    }
}

impl std::fmt::Display for ResolvedRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reference)
    }
}
