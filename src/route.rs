//! Route data model: descriptors supplied by the host and the derived
//! display rows returned to callers.
//!
//! Descriptors are read-only snapshots of the host's routing table. Rows are
//! transient, derived per call; `auth` and `scope` are `Option<Label>` so that
//! field omission (flag off) is distinct from a present-but-none label.

use serde::{Serialize, Serializer};

/// A display value that is either absent ("none") or a concrete string.
///
/// Serializes as JSON `false` when none, otherwise as the string, matching
/// the structured output contract consumed by JSON API callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    None,
    Value(String),
}

impl Label {
    pub fn is_none(&self) -> bool {
        matches!(self, Label::None)
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Label::None => serializer.serialize_bool(false),
            Label::Value(v) => serializer.serialize_str(v),
        }
    }
}

/// Scope lists attached to an authenticated route's access rule.
///
/// The three lists are independent and all may combine: `required` entries
/// render as `+item`, `forbidden` as `!item`, `selection` bare.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeRule {
    pub required: Vec<String>,
    pub forbidden: Vec<String>,
    pub selection: Vec<String>,
}

/// Authentication configuration of a single route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthConfig {
    /// Nothing set on the route; the host's default strategy applies, if any.
    Inherit,

    /// Authentication explicitly disabled.
    Disabled,

    /// One or more named strategies.
    Strategies(Vec<String>),

    /// Named strategies plus an access rule carrying scope lists.
    Access {
        strategies: Vec<String>,
        scope: ScopeRule,
    },
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig::Inherit
    }
}

/// One registered endpoint's metadata, as tracked by the host server.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    pub method: String,
    pub path: String,
    pub description: Option<String>,
    pub auth: AuthConfig,
}

/// One listener's slice of the host route table: base URI, optional labels,
/// and its registered routes in host enumeration order.
#[derive(Debug, Clone)]
pub struct ListenerContext {
    pub uri: String,
    pub labels: Vec<String>,
    pub routes: Vec<RouteDescriptor>,
}

/// Derived display row for a single route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRow {
    pub method: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Label>,
    pub description: String,
}

/// Derived rows for one listener context, sorted by path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteContext {
    pub uri: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub routes: Vec<RouteRow>,
}
