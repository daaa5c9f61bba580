/// Result alias used across layers.
///
/// Domain failures are raised as [`ForgeError`](super::error::ForgeError) and
/// carried inside `anyhow::Error` so callers can add context with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
