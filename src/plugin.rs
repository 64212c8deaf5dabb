//! Plugin surface: the host-server abstraction, registration, and the
//! exposed `info()` / `text()` capabilities.
//!
//! Registration validates the raw options (fatal on failure, nothing gets
//! exposed), wires a one-shot startup print when `showStart` is set, and
//! hands back a `RouteReporter` for the host's plugin registry.

use crate::error::RouteViewError;
use crate::extract;
use crate::options::DisplayOptions;
use crate::render::{self, OutputSink, StdoutSink};
use crate::route::{ListenerContext, RouteContext};
use std::sync::Arc;
use tracing::{debug, info};

/// One-shot callback fired when the host server has started. Errors flow to
/// whatever error channel the host's event system provides.
pub type StartedCallback = Box<dyn FnOnce() -> Result<(), RouteViewError> + Send>;

/// Capabilities the plugin consumes from the host server.
pub trait HostServer: Send + Sync {
    /// Snapshot of the live route table, one entry per listener, in
    /// enumeration order.
    fn contexts(&self) -> Result<Vec<ListenerContext>, RouteViewError>;

    /// Server-wide default auth strategies, if configured.
    fn default_strategies(&self) -> Option<Vec<String>>;

    /// Register a callback fired once when the server transitions to
    /// started. The subscription stays registered for the process lifetime.
    fn subscribe_started(&self, callback: StartedCallback);
}

/// Handle exposed back to the host after successful registration.
pub struct RouteReporter<S: HostServer> {
    server: Arc<S>,
    options: DisplayOptions,
}

impl<S: HostServer> RouteReporter<S> {
    /// Structured route info, re-read from the live table on every call.
    pub fn info(&self) -> Result<Vec<RouteContext>, RouteViewError> {
        extract::route_info(self.server.as_ref(), &self.options)
    }

    /// Fully formatted multi-context text block.
    pub fn text(&self) -> Result<String, RouteViewError> {
        Ok(render::render_text(&self.info()?))
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }
}

/// Register against a host, printing the startup table to stdout.
pub fn register<S>(
    server: Arc<S>,
    raw_options: serde_json::Value,
) -> Result<RouteReporter<S>, RouteViewError>
where
    S: HostServer + 'static,
{
    register_with_sink(server, raw_options, StdoutSink)
}

/// Register against a host with an explicit startup-print sink.
pub fn register_with_sink<S, K>(
    server: Arc<S>,
    raw_options: serde_json::Value,
    sink: K,
) -> Result<RouteReporter<S>, RouteViewError>
where
    S: HostServer + 'static,
    K: OutputSink + 'static,
{
    let options = DisplayOptions::validate(raw_options)?;
    debug!(?options, "route reporter registered");

    if options.show_start {
        let hook_server = Arc::clone(&server);
        let hook_options = options.clone();
        let mut sink = sink;
        server.subscribe_started(Box::new(move || {
            let contexts = extract::route_info(hook_server.as_ref(), &hook_options)?;
            sink.write_text(&render::render_text(&contexts))?;
            info!("printed route table on server start");
            Ok(())
        }));
    }

    Ok(RouteReporter { server, options })
}
