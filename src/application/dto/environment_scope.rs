/// Where the build environment is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvironmentScope {
    /// Only the builder child process sees the overrides (default)
    #[default]
    Subprocess,
    /// The overrides are applied to this process for the duration of the
    /// traversal and restored afterwards
    Process,
}

impl std::str::FromStr for EnvironmentScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "subprocess" => Ok(EnvironmentScope::Subprocess),
            "process" => Ok(EnvironmentScope::Process),
            _ => Err(format!(
                "Invalid environment scope: {}. Please specify 'subprocess' or 'process'",
                s
            )),
        }
    }
}

impl std::fmt::Display for EnvironmentScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvironmentScope::Subprocess => write!(f, "subprocess"),
            EnvironmentScope::Process => write!(f, "process"),
        }
    }
}
