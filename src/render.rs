//! Table rendering for route contexts.
//!
//! Produces the human-readable form: per context, a styled header line with
//! the listener URI, then a borderless grid of route rows. Rendering is a
//! pure function from contexts to text; the startup print side effect goes
//! through an injectable `OutputSink`.

use crate::error::RouteViewError;
use crate::route::{Label, RouteContext, RouteRow};
use comfy_table::presets::NOTHING;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::io::Write;

/// Destination for the automatic startup print.
pub trait OutputSink: Send {
    fn write_text(&mut self, text: &str) -> std::io::Result<()>;
}

/// Default sink: process stdout.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_text(&mut self, text: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }
}

/// Render all contexts as one text block, in host enumeration order.
///
/// Row order and content are exactly as extracted; no re-sorting, no
/// filtering.
pub fn render_text(contexts: &[RouteContext]) -> String {
    let mut out = String::new();
    for context in contexts {
        out.push_str(&format!("{}\n", format_title(context)));
        out.push_str(&render_routes(&context.routes));
    }
    out
}

/// Serialize contexts for JSON consumers (diagnostic endpoints and the like).
pub fn render_json(contexts: &[RouteContext]) -> Result<String, RouteViewError> {
    Ok(serde_json::to_string_pretty(contexts)?)
}

/// Header line: underlined cyan URI, labels bracket-joined after it.
fn format_title(context: &RouteContext) -> String {
    let title = if context.labels.is_empty() {
        context.uri.clone()
    } else {
        format!("{} [{}]", context.uri, context.labels.join(", "))
    };
    format!("{}", title.underline().cyan())
}

fn render_routes(rows: &[RouteRow]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);

    for row in rows {
        let mut cells = vec![format_method(&row.method), format_path(&row.path)];
        if let Some(auth) = &row.auth {
            cells.push(format_label(auth));
        }
        if let Some(scope) = &row.scope {
            cells.push(format_label(scope));
        }
        cells.push(format!("{}", row.description.yellow()));
        table.add_row(cells);
    }

    format!("{}\n", table)
}

fn format_method(method: &str) -> String {
    format!("{}", method.green())
}

/// Dim `{param}` segments; the underlying text is unchanged.
fn format_path(path: &str) -> String {
    let mut out = String::new();
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        match rest[start..].find('}') {
            Some(offset) => {
                let end = start + offset + 1;
                out.push_str(&rest[..start]);
                out.push_str(&format!("{}", (&rest[start..end]).dimmed()));
                rest = &rest[end..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Absent values render as a red "none" marker, present values in green.
fn format_label(label: &Label) -> String {
    match label {
        Label::None => format!("{}", "none".red()),
        Label::Value(v) => format!("{}", v.green()),
    }
}
