//! Graphviz DOT rendering for [`AdjList`].
//!
//! One line per physical record, so an undirected edge `{a, b}` shows up twice
//! (`a -- b` and `b -- a`), matching how it is stored.
//!
//! ```text
//! digraph {
//!   0 -> 5;
//!   0 -> 2;
//! }
//! ```

use core::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::adj_list::AdjList;

/// Rendering configuration.
///
/// The defaults produce the plain `digraph { .. }` / `graph { .. }` form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Prefix undirected headers with `strict`.
    pub strict: bool,
    /// Optional graph identifier placed after the `graph`/`digraph` keyword.
    ///
    /// Written bare when it is a plain DOT identifier, quoted otherwise.
    pub name: Option<String>,
    /// Append ` [weight=<w>]` to every edge line.
    pub show_weights: bool,
}

impl RenderOptions {
    /// Defaults, with the `strict` qualifier on.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Parses options from JSON. Missing fields take their defaults; unknown fields
    /// are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Renders `graph` into a fresh string.
pub fn to_dot(graph: &AdjList, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(16 + graph.edge_count() * 12);
    // Writing into a String cannot fail.
    let _ = write_dot(&mut out, graph, options);
    out
}

/// Whether `id` can be written without quotes: `[A-Za-z_][A-Za-z0-9_]*` or a numeral.
fn is_bare_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        Some(c) if c.is_ascii_digit() => id.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

fn write_id<W: Write>(out: &mut W, id: &str) -> fmt::Result {
    if is_bare_id(id) {
        return out.write_str(id);
    }
    out.write_char('"')?;
    for c in id.chars() {
        if c == '"' || c == '\\' {
            out.write_char('\\')?;
        }
        out.write_char(c)?;
    }
    out.write_char('"')
}

/// Streams the DOT text for `graph` into `out`.
pub fn write_dot<W: Write>(out: &mut W, graph: &AdjList, options: &RenderOptions) -> fmt::Result {
    // `strict` only qualifies undirected headers.
    let arrow = if graph.is_directed() {
        out.write_str("digraph ")?;
        "->"
    } else {
        if options.strict {
            out.write_str("strict ")?;
        }
        out.write_str("graph ")?;
        "--"
    };
    if let Some(name) = &options.name {
        write_id(out, name)?;
        out.write_char(' ')?;
    }
    out.write_str("{\n")?;

    for edge in graph.edges() {
        write!(out, "  {} {} {}", edge.source, arrow, edge.target)?;
        if options.show_weights {
            write!(out, " [weight={}]", edge.weight)?;
        }
        out.write_str(";\n")?;
    }

    out.write_str("}")
}
