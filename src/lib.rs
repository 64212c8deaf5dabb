//! Routeview: Route-Table Introspection and Reporting
//!
//! Reads a host server's route table, resolves the effective authentication
//! and scope information for every route, and renders a colorized table on
//! demand or automatically when the server starts.

pub mod error;
pub mod extract;
pub mod options;
pub mod plugin;
pub mod render;
pub mod route;
