//! Export of a [`Graph`] into the Graphviz [DOT] format, with optional
//! rendering through the external `dot` tool.
//!
//! Document generation is pure and writes to any [`Write`] sink;
//! [`Dot::render`] is a thin wrapper that hands the document to Graphviz
//! and produces a PNG image.
//!
//! [DOT]: https://graphviz.org/doc/info/lang.html
//!
//! # Examples
//!
//! ```
//! use grafo::{export::Dot, Graph};
//!
//! let mut graph = Graph::new_directed();
//! graph.add_edge_weighted("a", "b", 3);
//!
//! let doc = Dot::with_display(None).to_string(&graph);
//! assert!(doc.starts_with("digraph G {"));
//! assert!(doc.contains("\"a\" -> \"b\" [label=3];"));
//! ```

use std::{
    fmt::Display,
    hash::Hash,
    io::{self, Cursor, Write},
    path::Path,
    process::{Command, ExitStatus},
};

use rustc_hash::FxHashSet;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::graph::Graph;

/// The error returned by [`Dot::render`].
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing the intermediate document or spawning the tool failed.
    #[error("rendering graph failed: {0}")]
    Io(#[from] io::Error),
    /// The external tool ran but exited with a non-zero status.
    #[error("dot exited with {0}")]
    Command(ExitStatus),
}

/// Exporter of graphs into the DOT textual format.
///
/// The vertex label closure controls how vertex values appear in the
/// document; labels are emitted in their quoted, escaped string form.
pub struct Dot<V> {
    name: String,
    get_label: Box<dyn Fn(&V) -> String>,
}

impl<V> Dot<V> {
    /// Creates an exporter with the given graph name (`G` when `None`)
    /// and vertex label function.
    pub fn new<F>(name: Option<String>, get_label: F) -> Self
    where
        F: Fn(&V) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_label: Box::new(get_label),
        }
    }
}

impl<V: Display> Dot<V> {
    /// Creates an exporter that labels vertices with their [`Display`]
    /// form.
    pub fn with_display(name: Option<String>) -> Self {
        Self::new(name, |vertex| format!("{vertex}"))
    }
}

impl<V> Dot<V>
where
    V: Eq + Hash,
{
    /// Writes the DOT document for the graph into the given sink.
    ///
    /// The header declares `digraph` or `graph` depending on the
    /// orientation, with `->` or `--` as the edge connector. Vertices with
    /// an empty neighbor list (isolated vertices, and sinks in a directed
    /// graph) are emitted as bare label lines. Each undirected edge is
    /// emitted once, in whichever direction is encountered first; weights
    /// other than the default 1 are attached as a `label` attribute.
    pub fn export<W: Write>(&self, graph: &Graph<V>, out: &mut W) -> io::Result<()> {
        let (kind, connector) = if graph.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        writeln!(out, "{} {} {{", kind, self.name)?;

        let mut written = FxHashSet::default();

        for vertex in graph.vertices() {
            let list = graph.edges_from(vertex);

            if list.is_empty() {
                writeln!(out, "    {:?};", (self.get_label)(vertex))?;
            }

            for (target, weight) in list {
                // In an undirected graph the edge is stored in both
                // directions; skip it if the reverse was already written.
                if !graph.is_directed() && written.contains(&(target, vertex)) {
                    continue;
                }

                write!(
                    out,
                    "    {:?} {} {:?}",
                    (self.get_label)(vertex),
                    connector,
                    (self.get_label)(target)
                )?;
                if *weight != 1 {
                    write!(out, " [label={weight}]")?;
                }
                writeln!(out, ";")?;

                written.insert((vertex, target));
            }
        }

        writeln!(out, "}}")?;

        Ok(())
    }

    /// Returns the DOT document for the graph as a string.
    pub fn to_string(&self, graph: &Graph<V>) -> String {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }

    /// Renders the graph into a PNG image using the external Graphviz
    /// `dot` tool.
    ///
    /// The document is written to a named temporary file which is removed
    /// when this function returns, on success and on failure alike. The
    /// call blocks until the tool exits; a non-zero exit status is
    /// reported as [`RenderError::Command`].
    pub fn render<P: AsRef<Path>>(&self, graph: &Graph<V>, png_path: P) -> Result<(), RenderError> {
        let mut file = NamedTempFile::new()?;

        self.export(graph, &mut file)?;
        file.flush()?;

        let status = Command::new("dot")
            .arg("-Tpng")
            .arg(file.path())
            .arg("-o")
            .arg(png_path.as_ref())
            .status()?;

        if !status.success() {
            return Err(RenderError::Command(status));
        }

        Ok(())
    }
}
