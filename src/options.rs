//! Display options: validation and defaults.
//!
//! Options arrive from the host as an untyped JSON mapping at registration
//! time. Validation applies defaults for omitted keys and rejects unknown
//! keys or non-boolean values; rejection is fatal to registration.

use crate::error::RouteViewError;
use serde::{Deserialize, Serialize};

/// Validated display options, immutable after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct DisplayOptions {
    /// Include the auth column / field.
    pub show_auth: bool,

    /// Include the scope column / field.
    pub show_scope: bool,

    /// Print the route table automatically when the server starts.
    pub show_start: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_auth: false,
            show_scope: false,
            show_start: true,
        }
    }
}

impl DisplayOptions {
    /// Validate an untyped options mapping.
    ///
    /// An absent mapping (`null`) yields the defaults. Unknown keys and
    /// recognized keys holding non-boolean values are rejected with the
    /// violation spelled out in the error message.
    pub fn validate(raw: serde_json::Value) -> Result<Self, RouteViewError> {
        if raw.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(raw)
            .map_err(|e| RouteViewError::Config(format!("Invalid options: {}", e)))
    }
}
