//! Error types for route-table introspection and reporting.

use thiserror::Error;

/// Errors surfaced by options validation, route-table access, and rendering.
#[derive(Debug, Error)]
pub enum RouteViewError {
    /// Invalid display options. Fatal at registration; no capability is
    /// exposed when this is raised.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host's route table or default-auth lookup failed. Propagated
    /// untouched to callers of `info()` / `text()`.
    #[error("Route table access failed: {0}")]
    TableAccess(String),

    /// Writing the rendered table to the output sink failed.
    #[error("Output write failed: {0}")]
    Render(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
