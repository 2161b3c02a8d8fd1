//! Reading edge lists and reading/writing vertex label files.
//!
//! Edge lists are plain text, one `source target` pair per line separated by
//! whitespace. Lines starting with `#` or `%` are comments and any column
//! after the second is ignored. Label files hold one `vertex<TAB>label` line
//! per vertex, with `inf` for unreachable vertices.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::graph::store::GraphStore;
use crate::graph::types::{Label, VertexId};
use crate::{Error, Result};

/// Edges parsed from an edge list, plus the vertex count they imply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    pub vertex_count: usize,
    pub edges: Vec<(VertexId, VertexId)>,
}

impl EdgeList {
    /// Builds an edge list whose vertex count is one past the largest ID used
    pub fn from_edges(edges: Vec<(VertexId, VertexId)>) -> Self {
        let vertex_count = edges
            .iter()
            .map(|&(from, to)| from.max(to) as usize + 1)
            .max()
            .unwrap_or(0);
        EdgeList {
            vertex_count,
            edges,
        }
    }

    pub fn into_store(self) -> Result<GraphStore> {
        GraphStore::from_edges(self.vertex_count, &self.edges)
    }
}

/// Parses an edge list from any buffered reader
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<EdgeList> {
    let mut edges = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::Io {
            path: PathBuf::new(),
            source,
        })?;
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let from = parse_vertex(fields.next(), line_no)?;
        let to = parse_vertex(fields.next(), line_no)?;
        edges.push((from, to));
    }
    Ok(EdgeList::from_edges(edges))
}

/// Reads an edge list file
pub fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<EdgeList> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::io(path, source))?;
    parse_edge_list(BufReader::new(file)).map_err(|err| match err {
        Error::Io { source, .. } => Error::io(path, source),
        other => other,
    })
}

/// Writes an edge list file in the format [`read_edge_list`] accepts
pub fn write_edge_list<P: AsRef<Path>>(path: P, edges: &[(VertexId, VertexId)]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::io(path, source))?;
    let mut out = BufWriter::new(file);
    for &(from, to) in edges {
        writeln!(out, "{} {}", from, to).map_err(|source| Error::io(path, source))?;
    }
    out.flush().map_err(|source| Error::io(path, source))
}

/// Where the labels computed for the graph in `file` are stored
pub fn labels_path<P: AsRef<Path>>(file: P) -> PathBuf {
    suffixed(file.as_ref(), ".sssp.labels")
}

/// Where the label analysis report for the graph in `file` is stored
pub fn analysis_path<P: AsRef<Path>>(file: P) -> PathBuf {
    suffixed(file.as_ref(), ".sssp.analysis.json")
}

fn suffixed(file: &Path, suffix: &str) -> PathBuf {
    let mut name = file.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Writes one `vertex<TAB>label` line per vertex
pub fn write_labels<P: AsRef<Path>>(path: P, labels: &[Label]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::io(path, source))?;
    let mut out = BufWriter::new(file);
    for (vertex, label) in labels.iter().enumerate() {
        writeln!(out, "{}\t{}", vertex, label).map_err(|source| Error::io(path, source))?;
    }
    out.flush().map_err(|source| Error::io(path, source))
}

/// Reads a label file written by [`write_labels`]. Vertices missing from the
/// file are reported as unreachable.
///
/// The result is sized by the largest vertex ID in the file, so a file whose
/// largest ID exceeds twice the number of listed vertices is rejected with
/// [`Error::Parse`] rather than allocated.
pub fn read_labels<P: AsRef<Path>>(path: P) -> Result<Vec<Label>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::io(path, source))?;
    let mut entries: BTreeMap<VertexId, Label> = BTreeMap::new();
    // Largest vertex ID seen and the line it came from
    let mut largest: Option<(VertexId, usize)> = None;

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| Error::io(path, source))?;
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let vertex = parse_vertex(fields.next(), line_no)?;
        let label = match fields.next() {
            Some("inf") => Label::INFINITY,
            Some(raw) => raw.parse::<u32>().map(Label).map_err(|_| Error::Parse {
                line: line_no,
                message: format!("invalid label '{}'", raw),
            })?,
            None => {
                return Err(Error::Parse {
                    line: line_no,
                    message: "missing label".to_string(),
                })
            }
        };

        if largest.map_or(true, |(max, _)| vertex > max) {
            largest = Some((vertex, line_no));
        }
        entries.insert(vertex, label);
    }

    let (max, line) = match largest {
        Some(found) => found,
        None => return Ok(Vec::new()),
    };
    let len = max as usize + 1;
    if len > entries.len().saturating_mul(2) {
        return Err(Error::Parse {
            line,
            message: format!(
                "vertex id {} is out of proportion to the {} labels in the file",
                max,
                entries.len()
            ),
        });
    }

    let mut labels = vec![Label::INFINITY; len];
    for (vertex, label) in entries {
        labels[vertex as usize] = label;
    }
    Ok(labels)
}

fn parse_vertex(field: Option<&str>, line: usize) -> Result<VertexId> {
    let raw = field.ok_or_else(|| Error::Parse {
        line,
        message: "expected two vertex ids".to_string(),
    })?;
    raw.parse::<VertexId>().map_err(|_| Error::Parse {
        line,
        message: format!("invalid vertex id '{}'", raw),
    })
}
