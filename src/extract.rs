//! Route info extraction.
//!
//! Reads a snapshot of the host's route table and produces one `RouteContext`
//! per listener: effective auth resolution (explicit setting wins, otherwise
//! the host default, otherwise none), scope clause composition from the
//! route's access rule, and ascending sort by path within each context.

use crate::error::RouteViewError;
use crate::options::DisplayOptions;
use crate::plugin::HostServer;
use crate::route::{AuthConfig, Label, RouteContext, RouteDescriptor, RouteRow, ScopeRule};
use tracing::debug;

/// Derive display rows for every listener context of the host.
///
/// Re-reads the live table on every call; repeated calls without a table
/// change yield identical output. Host access failures propagate untouched.
pub fn route_info(
    server: &dyn HostServer,
    options: &DisplayOptions,
) -> Result<Vec<RouteContext>, RouteViewError> {
    let listeners = server.contexts()?;
    let default_strategies = server.default_strategies();
    debug!(listeners = listeners.len(), "collecting route info");

    let mut contexts = Vec::with_capacity(listeners.len());
    for listener in listeners {
        let mut routes: Vec<RouteRow> = listener
            .routes
            .iter()
            .map(|descriptor| build_row(descriptor, default_strategies.as_deref(), options))
            .collect();
        // Stable sort: ties keep host enumeration order.
        routes.sort_by(|a, b| a.path.cmp(&b.path));

        contexts.push(RouteContext {
            uri: listener.uri,
            labels: listener.labels,
            routes,
        });
    }

    Ok(contexts)
}

fn build_row(
    descriptor: &RouteDescriptor,
    default_strategies: Option<&[String]>,
    options: &DisplayOptions,
) -> RouteRow {
    let auth = effective_auth(&descriptor.auth, default_strategies);

    // Scope is only meaningful when an effective strategy exists.
    let scope = if auth.is_none() {
        Label::None
    } else {
        match &descriptor.auth {
            AuthConfig::Access { scope, .. } => scope_label(scope),
            _ => Label::None,
        }
    };

    RouteRow {
        method: descriptor.method.to_uppercase(),
        path: descriptor.path.clone(),
        auth: options.show_auth.then_some(auth),
        scope: options.show_scope.then_some(scope),
        description: descriptor.description.clone().unwrap_or_default(),
    }
}

/// Resolve the strategy name(s) that actually apply to a route.
///
/// Explicit settings win, including an explicit disable; a route with nothing
/// set inherits the host default. Multiple strategies join with `","`.
fn effective_auth(auth: &AuthConfig, default_strategies: Option<&[String]>) -> Label {
    match auth {
        AuthConfig::Inherit => match default_strategies {
            Some(strategies) if !strategies.is_empty() => Label::Value(strategies.join(",")),
            _ => Label::None,
        },
        AuthConfig::Disabled => Label::None,
        AuthConfig::Strategies(strategies) | AuthConfig::Access { strategies, .. } => {
            if strategies.is_empty() {
                Label::None
            } else {
                Label::Value(strategies.join(","))
            }
        }
    }
}

/// Compose the scope label from a route's access rule.
///
/// Each non-empty list contributes one comma-joined clause; clauses join
/// with `", "` in the order required, forbidden, selection.
fn scope_label(rule: &ScopeRule) -> Label {
    let mut clauses = Vec::new();

    if !rule.required.is_empty() {
        let clause: Vec<String> = rule.required.iter().map(|s| format!("+{}", s)).collect();
        clauses.push(clause.join(", "));
    }
    if !rule.forbidden.is_empty() {
        let clause: Vec<String> = rule.forbidden.iter().map(|s| format!("!{}", s)).collect();
        clauses.push(clause.join(", "));
    }
    if !rule.selection.is_empty() {
        clauses.push(rule.selection.join(", "));
    }

    if clauses.is_empty() {
        Label::None
    } else {
        Label::Value(clauses.join(", "))
    }
}
