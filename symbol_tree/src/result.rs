//! Result type alias shared across the workspace.
use crate::error::TreeError;

/// Workspace-wide `Result` alias with `TreeError` as the default error.
pub type Result<T, E = TreeError> = std::result::Result<T, E>;
